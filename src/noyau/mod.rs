//! Noyau des deux calculatrices (sans vue)
//!
//! Organisation interne :
//! - touches.rs      : opérateurs + actions du pavé (surface d’entrée)
//! - moteur.rs       : trait Moteur + Affichage (surface de sortie)
//! - erreur.rs       : erreurs typées (calcul, syntaxe)
//! - decimal.rs      : décimal à virgule fixe (big int)
//! - accumulateur.rs : moteur à accumulateur (canonique)
//! - analyse.rs      : analyseur descendant récursif (f64)
//! - expression.rs   : moteur à expression brute

pub mod accumulateur;
pub mod analyse;
pub mod decimal;
pub mod erreur;
pub mod expression;
pub mod moteur;
pub mod touches;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::Accumulateur;
pub use expression::EditeurExpression;
pub use moteur::{Affichage, Moteur};
pub use touches::{Action, Operateur};
