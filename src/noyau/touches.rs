//! Vocabulaire des touches : opérateurs binaires + actions du pavé.
//!
//! Seule surface d’entrée des moteurs. La vue (boutons) et le clavier
//! produisent des `Action`, rien d’autre.

/// Opérateur binaire différé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// ASCII canonique (forme interne des expressions).
    pub fn ascii(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Glyphe d’affichage : × ÷ − (le + reste +).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '−',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Reconnaît l’ASCII et les glyphes d’affichage.
    pub fn depuis_car(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' | '−' => Some(Operateur::Moins),
            '*' | '×' | 'x' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// Une pression de touche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Chiffre 0..=9 (hors bornes => ignoré par les moteurs).
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Efface,
    Retour,
    Signe,
    Pourcent,
    Egal,
}

impl Action {
    /// Clavier : un caractère tapé => une action (si reconnue).
    /// Enter / Backspace / Escape sont gérés côté vue (touches, pas texte).
    pub fn depuis_touche(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Action::Chiffre(d as u8));
        }
        if let Some(op) = Operateur::depuis_car(c) {
            return Some(Action::Operateur(op));
        }
        match c {
            // virgule décimale tolérée au clavier
            '.' | ',' => Some(Action::Point),
            '=' => Some(Action::Egal),
            '%' => Some(Action::Pourcent),
            _ => None,
        }
    }

    /// Texte du bouton.
    pub fn libelle(self) -> String {
        match self {
            Action::Chiffre(d) => d.to_string(),
            Action::Point => ".".into(),
            Action::Operateur(op) => op.symbole().to_string(),
            Action::Efface => "AC".into(),
            Action::Retour => "DEL".into(),
            Action::Signe => "±".into(),
            Action::Pourcent => "%".into(),
            Action::Egal => "=".into(),
        }
    }
}
