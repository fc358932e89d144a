//! Erreurs du noyau.
//!
//! Aucune n’est fatale : le répartiteur (`Moteur::applique`) les absorbe
//! et ne les reflète que dans l’affichage.

use thiserror::Error;

/// Échecs du moteur à accumulateur (décimal à virgule fixe).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// La saisie courante ne se lit pas comme un nombre décimal.
    #[error("entrée non numérique : {0:?}")]
    EntreeNonNumerique(String),

    #[error("division par zéro")]
    DivisionParZero,
}

/// Échecs de l’analyseur (moteur à expression).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("Entrée vide")]
    Vide,

    /// Position de facteur vide (mode strict seulement).
    #[error("opérande manquant à la position {0}")]
    OperandeManquant(usize),

    /// `(` sans `)` (mode strict seulement).
    #[error("parenthèse fermante manquante à la position {0}")]
    ParentheseManquante(usize),

    #[error("nombre invalide {texte:?} à la position {pos}")]
    NombreInvalide { pos: usize, texte: String },

    /// Caractères non consommés après une analyse complète.
    #[error("caractère inattendu {car:?} à la position {pos}")]
    CaractereInattendu { pos: usize, car: char },

    #[error("imbrication trop profonde (max {0})")]
    TropProfond(usize),
}
