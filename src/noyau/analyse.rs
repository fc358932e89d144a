// src/noyau/analyse.rs
//
// Analyseur descendant récursif (une passe, sans retour arrière) sur f64.
//
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('*' | '/') facteur)*
//   facteur    := ('+' | '-') facteur | '(' expression ')' | nombre
//   nombre     := chiffres avec au plus un '.' (ex: 12, 1.5, 5., .5)
//
// Blancs ignorés entre jetons. Division IEEE : x/0 donne ±inf ou NaN (pas une erreur).
//
// Deux tolérances :
// - Souple  (aperçu live) : facteur vide => 0, ')' manquante tolérée
// - Stricte (validation)  : facteur vide / ')' manquante => erreur
// Dans les deux cas, des caractères restants après l’analyse => erreur.

use super::erreur::ErreurSyntaxe;

/// Garde-fou : profondeur max de facteurs imbriqués (parenthèses, signes unaires).
pub const PROFONDEUR_MAX: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tolerance {
    Stricte,
    Souple,
}

/// Évalue une expression complète.
pub fn evalue(texte: &str, tolerance: Tolerance) -> Result<f64, ErreurSyntaxe> {
    if texte.trim().is_empty() {
        return Err(ErreurSyntaxe::Vide);
    }
    Analyseur::new(texte, tolerance).analyse()
}

struct Analyseur<'a> {
    texte: &'a str,
    pos: usize,
    tolerance: Tolerance,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn new(texte: &'a str, tolerance: Tolerance) -> Self {
        Self {
            texte,
            pos: 0,
            tolerance,
            profondeur: 0,
        }
    }

    /* ------------------------ Curseur ------------------------ */

    fn courant(&self) -> Option<u8> {
        self.texte.as_bytes().get(self.pos).copied()
    }

    fn saute_blancs(&mut self) {
        while matches!(self.courant(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consomme `attendu` (après les blancs) si c’est le prochain octet.
    fn mange(&mut self, attendu: u8) -> bool {
        self.saute_blancs();
        if self.courant() == Some(attendu) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /* ------------------------ Règles ------------------------ */

    fn analyse(mut self) -> Result<f64, ErreurSyntaxe> {
        let x = self.expression()?;
        self.saute_blancs();

        // `pos` n’avance que sur de l’ASCII : toujours sur une frontière de char
        match self.texte[self.pos..].chars().next() {
            Some(car) => Err(ErreurSyntaxe::CaractereInattendu { pos: self.pos, car }),
            None => Ok(x),
        }
    }

    fn expression(&mut self) -> Result<f64, ErreurSyntaxe> {
        let mut x = self.terme()?;
        loop {
            if self.mange(b'+') {
                x += self.terme()?;
            } else if self.mange(b'-') {
                x -= self.terme()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn terme(&mut self) -> Result<f64, ErreurSyntaxe> {
        let mut x = self.facteur()?;
        loop {
            if self.mange(b'*') {
                x *= self.facteur()?;
            } else if self.mange(b'/') {
                x /= self.facteur()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn facteur(&mut self) -> Result<f64, ErreurSyntaxe> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(ErreurSyntaxe::TropProfond(PROFONDEUR_MAX));
        }
        self.profondeur += 1;
        let x = self.facteur_sans_garde();
        self.profondeur -= 1;
        x
    }

    fn facteur_sans_garde(&mut self) -> Result<f64, ErreurSyntaxe> {
        if self.mange(b'+') {
            return self.facteur();
        }
        if self.mange(b'-') {
            return Ok(-self.facteur()?);
        }

        if self.mange(b'(') {
            let x = self.expression()?;
            if !self.mange(b')') && self.tolerance == Tolerance::Stricte {
                return Err(ErreurSyntaxe::ParentheseManquante(self.pos));
            }
            return Ok(x);
        }

        self.nombre()
    }

    fn nombre(&mut self) -> Result<f64, ErreurSyntaxe> {
        self.saute_blancs();
        let debut = self.pos;
        while matches!(self.courant(), Some(b'0'..=b'9' | b'.')) {
            self.pos += 1;
        }

        if debut == self.pos {
            // position de facteur vide (saisie partielle "2+", "(", ...)
            return match self.tolerance {
                Tolerance::Souple => Ok(0.0),
                Tolerance::Stricte => Err(ErreurSyntaxe::OperandeManquant(debut)),
            };
        }

        let brut = &self.texte[debut..self.pos];
        brut.parse::<f64>().map_err(|_| ErreurSyntaxe::NombreInvalide {
            pos: debut,
            texte: brut.to_string(),
        })
    }
}
