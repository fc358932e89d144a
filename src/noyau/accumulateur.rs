//! Moteur à accumulateur (moteur canonique).
//!
//! État explicite : saisie en cours + opérande gauche / opérateur en attente
//! + drapeau « vient d’évaluer ». Arithmétique décimale à virgule fixe.
//!
//! Contrats :
//! - `saisie` se lit toujours comme un `Decimal` (forme canonique : pas de zéro
//!   de tête sauf "0", au plus un point, signe `-` optionnel).
//! - opérateur en attente => opérande gauche présent (porté par `Attente`).
//! - un échec (saisie illisible, division par zéro) laisse l’état intact.

use super::decimal::{Decimal, CHIFFRES_DIVISION};
use super::erreur::ErreurCalcul;
use super::moteur::{Affichage, Moteur};
use super::touches::{Action, Operateur};

const SAISIE_INITIALE: &str = "0";
const INDICATEUR_INVALIDE: &str = "= Invalid";

/// Opérande gauche + opérateur choisi, en attente de l’opérande droit.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Attente {
    gauche: Decimal,
    op: Operateur,
}

#[derive(Clone, Debug)]
pub struct Accumulateur {
    saisie: String,
    attente: Option<Attente>,
    vient_d_evaluer: bool,
    // "= Invalid" à afficher jusqu’à la prochaine action
    invalide: bool,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            saisie: SAISIE_INITIALE.to_string(),
            attente: None,
            vient_d_evaluer: false,
            invalide: false,
        }
    }
}

/// Opération binaire : + - * exacts, / à 12 décimales (demi vers le haut).
pub fn compute(a: &Decimal, b: &Decimal, op: Operateur) -> Result<Decimal, ErreurCalcul> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise => a.divise(b, CHIFFRES_DIVISION),
    }
}

impl Accumulateur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état (tests) ------------------------ */

    #[cfg(test)]
    pub fn saisie(&self) -> &str {
        &self.saisie
    }

    #[cfg(test)]
    pub fn valeur_memoire(&self) -> Option<&Decimal> {
        self.attente.as_ref().map(|a| &a.gauche)
    }

    #[cfg(test)]
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.attente.as_ref().map(|a| a.op)
    }

    #[cfg(test)]
    pub fn vient_d_evaluer(&self) -> bool {
        self.vient_d_evaluer
    }

    fn valeur_saisie(&self) -> Result<Decimal, ErreurCalcul> {
        self.saisie.parse()
    }

    /// Après "=", un chiffre ou un point repart d’une saisie neuve.
    fn repart_si_evalue(&mut self) {
        if self.vient_d_evaluer && self.attente.is_none() {
            self.saisie = SAISIE_INITIALE.to_string();
            self.vient_d_evaluer = false;
        }
    }

    /* ------------------------ Actions ------------------------ */

    pub fn append_digit(&mut self, d: u8) {
        self.invalide = false;
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };
        self.repart_si_evalue();

        match self.saisie.as_str() {
            "0" => self.saisie = c.to_string(),
            "-0" => self.saisie = format!("-{c}"),
            _ => self.saisie.push(c),
        }
    }

    pub fn append_dot(&mut self) {
        self.invalide = false;
        self.repart_si_evalue();
        if !self.saisie.contains('.') {
            self.saisie.push('.');
        }
    }

    pub fn set_operator(&mut self, op: Operateur) -> Result<(), ErreurCalcul> {
        self.invalide = false;
        let courant = self.valeur_saisie()?;

        let gauche = match &self.attente {
            None => courant,
            Some(a) if !self.vient_d_evaluer => match compute(&a.gauche, &courant, a.op) {
                Ok(v) => v,
                Err(e) => {
                    self.invalide = true;
                    return Err(e);
                }
            },
            Some(a) => a.gauche.clone(),
        };

        self.attente = Some(Attente { gauche, op });
        self.saisie = SAISIE_INITIALE.to_string();
        self.vient_d_evaluer = false;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn backspace(&mut self) {
        self.invalide = false;
        if self.vient_d_evaluer {
            return;
        }

        let n = self.saisie.chars().count();
        if n <= 1 || (n == 2 && self.saisie.starts_with('-')) {
            self.saisie = SAISIE_INITIALE.to_string();
        } else {
            self.saisie.pop();
        }

        if self.saisie == "-" || self.saisie.trim().is_empty() {
            self.saisie = SAISIE_INITIALE.to_string();
        }
    }

    pub fn toggle_sign(&mut self) {
        self.invalide = false;
        if self.saisie == SAISIE_INITIALE {
            return;
        }
        if self.saisie.starts_with('-') {
            self.saisie.remove(0);
        } else {
            self.saisie.insert(0, '-');
        }
    }

    /// x% seul => x/100 ; avec "a op" en attente => a*x/100. Attente inchangée.
    pub fn percent(&mut self) -> Result<(), ErreurCalcul> {
        self.invalide = false;
        let courant = self.valeur_saisie()?;
        let cent = Decimal::entier(100);

        let res = match &self.attente {
            Some(a) => (&a.gauche * &courant).divise(&cent, CHIFFRES_DIVISION),
            None => courant.divise(&cent, CHIFFRES_DIVISION),
        };
        let res = res.inspect_err(|_| self.invalide = true)?;

        self.saisie = format(&res);
        Ok(())
    }

    pub fn equals(&mut self) -> Result<(), ErreurCalcul> {
        self.invalide = false;
        let Some(a) = &self.attente else {
            // déjà une valeur finale : idempotent
            self.vient_d_evaluer = true;
            return Ok(());
        };

        let droite = self.valeur_saisie()?;
        let res = match compute(&a.gauche, &droite, a.op) {
            Ok(v) => v,
            Err(e) => {
                self.invalide = true;
                return Err(e);
            }
        };

        self.saisie = format(&res);
        self.attente = None;
        self.vient_d_evaluer = true;
        Ok(())
    }

    /* ------------------------ Aperçu (lecture seule) ------------------------ */

    /// "<gauche> <symbole> <courant> = <résultat>", "=" si rien en attente,
    /// "= Invalid" si le calcul provisoire échoue.
    pub fn preview_text(&self) -> String {
        let Some(a) = &self.attente else {
            return "=".to_string();
        };
        let Ok(courant) = self.valeur_saisie() else {
            return "=".to_string();
        };

        match compute(&a.gauche, &courant, a.op) {
            Ok(res) => format!(
                "{} {} {} = {}",
                format(&a.gauche),
                a.op.symbole(),
                format(&courant),
                format(&res)
            ),
            Err(_) => INDICATEUR_INVALIDE.to_string(),
        }
    }
}

/// Texte d’affichage d’un décimal (sans zéros de fin, jamais "-0", jamais d’exposant).
pub fn format(v: &Decimal) -> String {
    v.to_string()
}

impl Moteur for Accumulateur {
    fn nom(&self) -> &'static str {
        "accumulateur"
    }

    fn execute(&mut self, action: Action) {
        let res = match action {
            Action::Chiffre(d) => {
                self.append_digit(d);
                Ok(())
            }
            Action::Point => {
                self.append_dot();
                Ok(())
            }
            Action::Operateur(op) => self.set_operator(op),
            Action::Efface => {
                self.clear_all();
                Ok(())
            }
            Action::Retour => {
                self.backspace();
                Ok(())
            }
            Action::Signe => {
                self.toggle_sign();
                Ok(())
            }
            Action::Pourcent => self.percent(),
            Action::Egal => self.equals(),
        };

        if let Err(err) = res {
            tracing::debug!(%err, ?action, "accumulateur : action absorbée");
        }
    }

    fn affichage(&self) -> Affichage {
        let secondaire = if self.invalide {
            INDICATEUR_INVALIDE.to_string()
        } else {
            self.preview_text()
        };
        Affichage {
            principal: self.saisie.clone(),
            // l’aperçu provisoire peut aussi tomber sur l’indicateur
            erreur: secondaire == INDICATEUR_INVALIDE,
            secondaire,
        }
    }
}
