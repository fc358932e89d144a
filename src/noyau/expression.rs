//! Moteur à expression : une chaîne brute, ré-évaluée à chaque touche.
//!
//! - aperçu live : tolérance souple, échec => aperçu vidé (silencieux)
//! - "=" et "%"  : tolérance stricte, échec => "Error", expression intacte
//!
//! Arithmétique f64 : x/0 s’affiche tel quel (Infinity, NaN).

use super::analyse::{evalue, Tolerance};
use super::erreur::ErreurSyntaxe;
use super::moteur::{Affichage, Moteur};
use super::touches::{Action, Operateur};

const INDICATEUR_ERREUR: &str = "Error";

/// Ligne secondaire du moteur à expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Apercu {
    #[default]
    Vide,
    Valeur(String),
    Erreur,
}

#[derive(Clone, Debug, Default)]
pub struct EditeurExpression {
    expression: String,
    apercu: Apercu,
}

/// Glyphes d’affichage (et `x`) -> opérateurs ASCII.
fn normalise(brut: &str) -> String {
    brut.chars()
        .map(|c| Operateur::depuis_car(c).map_or(c, Operateur::ascii))
        .collect()
}

/// Opérateurs ASCII -> glyphes d’affichage. Le `-` reste ASCII (il sert aussi de signe).
fn habille(expr: &str) -> String {
    expr.chars()
        .map(|c| match Operateur::depuis_car(c) {
            Some(op @ (Operateur::Fois | Operateur::Divise)) => op.symbole(),
            _ => c,
        })
        .collect()
}

/// Entier si la valeur est entière, sinon forme décimale (jamais d’exposant).
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // au-delà de i64, `as` sature : on garde la forme décimale
    if v == v.trunc() && v.abs() < 9.0e18 {
        return (v as i64).to_string();
    }
    format!("{v}")
}

impl EditeurExpression {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[cfg(test)]
    pub fn apercu(&self) -> &Apercu {
        &self.apercu
    }

    /// Évaluation stricte (celle de "=").
    pub fn evaluate(expr: &str) -> Result<f64, ErreurSyntaxe> {
        evalue(expr, Tolerance::Stricte)
    }

    /* ------------------------ Actions ------------------------ */

    pub fn append_token(&mut self, brut: &str) {
        self.expression.push_str(&normalise(brut));
        self.rafraichit_apercu();
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.apercu = Apercu::Vide;
    }

    pub fn backspace(&mut self) {
        if self.expression.pop().is_some() {
            self.rafraichit_apercu();
        }
    }

    pub fn toggle_sign(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        if self.expression.starts_with('-') {
            self.expression.remove(0);
        } else {
            self.expression.insert(0, '-');
        }
        self.rafraichit_apercu();
    }

    pub fn percent(&mut self) -> Result<(), ErreurSyntaxe> {
        self.append_token("/100");
        self.equals()
    }

    /// Validation : succès => l’expression devient le résultat formaté.
    pub fn equals(&mut self) -> Result<(), ErreurSyntaxe> {
        if self.expression.is_empty() {
            return Ok(());
        }

        match Self::evaluate(&self.expression) {
            Ok(v) => {
                self.expression = format_nombre(v);
                self.apercu = Apercu::Vide;
                Ok(())
            }
            Err(e) => {
                self.apercu = Apercu::Erreur;
                Err(e)
            }
        }
    }

    /// Aperçu live (non validant) : jamais d’erreur visible.
    fn rafraichit_apercu(&mut self) {
        self.apercu = match evalue(&self.expression, Tolerance::Souple) {
            Ok(v) => Apercu::Valeur(format_nombre(v)),
            Err(_) => Apercu::Vide,
        };
    }
}

impl Moteur for EditeurExpression {
    fn nom(&self) -> &'static str {
        "expression"
    }

    fn execute(&mut self, action: Action) {
        let res = match action {
            // les boutons envoient leur libellé (glyphes compris), comme la vue
            Action::Chiffre(d) if d <= 9 => {
                self.append_token(&action.libelle());
                Ok(())
            }
            Action::Chiffre(_) => Ok(()),
            Action::Point | Action::Operateur(_) => {
                self.append_token(&action.libelle());
                Ok(())
            }
            Action::Efface => {
                self.clear();
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
            tracing::debug!(%err, expression = %self.expression, "expression : validation refusée");
        }
    }

    fn affichage(&self) -> Affichage {
        let secondaire = match &self.apercu {
            Apercu::Vide => String::new(),
            Apercu::Valeur(v) => v.clone(),
            Apercu::Erreur => INDICATEUR_ERREUR.to_string(),
        };
        Affichage {
            principal: habille(&self.expression),
            secondaire,
            erreur: self.apercu == Apercu::Erreur,
        }
    }
}
