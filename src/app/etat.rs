//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir le moteur choisi + la dernière projection `Affichage`,
//! et relayer les actions (boutons / clavier) vers le moteur.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Moteur::applique`.
//! - `affichage` est toujours la projection du moteur courant.

use crate::noyau::{Action, Affichage, Moteur};
use crate::reglages::ChoixMoteur;

pub struct AppCalc {
    choix: ChoixMoteur,
    moteur: Box<dyn Moteur>,
    affichage: Affichage,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(ChoixMoteur::default())
    }
}

impl AppCalc {
    pub fn new(choix: ChoixMoteur) -> Self {
        let moteur = choix.construit();
        let affichage = moteur.affichage();
        Self {
            choix,
            moteur,
            affichage,
        }
    }

    pub fn choix(&self) -> ChoixMoteur {
        self.choix
    }

    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    /* ------------------------ Actions ------------------------ */

    /// Une touche (bouton ou clavier) => moteur => nouvel affichage.
    pub fn action(&mut self, action: Action) {
        self.affichage = self.moteur.applique(action);
    }

    /// Change de moteur : état neuf (pas de conversion entre modèles).
    pub fn change_moteur(&mut self, choix: ChoixMoteur) {
        if choix == self.choix {
            return;
        }
        tracing::info!(moteur = choix.libelle(), "changement de moteur");
        *self = Self::new(choix);
    }
}
