//! Réglages de lancement (ligne de commande).
//!
//! Natif seulement en pratique : en wasm on part des valeurs par défaut.

use clap::{Parser, ValueEnum};

use crate::noyau::{Accumulateur, EditeurExpression, Moteur};

/// Filtre de journal par défaut (remplacé par RUST_LOG s’il est défini).
pub const JOURNAL_DEFAUT: &str = "info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ChoixMoteur {
    /// Accumulateur + décimal à virgule fixe (canonique)
    #[default]
    Accumulateur,
    /// Expression brute + analyseur f64
    Expression,
}

impl ChoixMoteur {
    pub const TOUS: [ChoixMoteur; 2] = [ChoixMoteur::Accumulateur, ChoixMoteur::Expression];

    /// Moteur neuf (état initial).
    pub fn construit(self) -> Box<dyn Moteur> {
        match self {
            ChoixMoteur::Accumulateur => Box::new(Accumulateur::new()),
            ChoixMoteur::Expression => Box::new(EditeurExpression::new()),
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ChoixMoteur::Accumulateur => "Accumulateur",
            ChoixMoteur::Expression => "Expression",
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(
    name = "calculatrice_duo",
    version,
    about = "Calculatrice : accumulateur ou expression"
)]
pub struct Reglages {
    /// Moteur au démarrage
    #[arg(long, value_enum, default_value_t = ChoixMoteur::Accumulateur)]
    pub moteur: ChoixMoteur,

    /// Filtre tracing (ex: "debug", "calculatrice_duo=trace")
    #[arg(long, default_value = JOURNAL_DEFAUT)]
    pub journal: String,
}
