//! Contrat commun des deux moteurs : actions en entrée, `Affichage` en sortie.

use super::touches::Action;

/// Ce que la vue affiche : fonction pure de l’état du moteur.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    /// Saisie courante ou expression (glyphes d’affichage).
    pub principal: String,
    /// Aperçu live, résultat, ou indicateur d’erreur ("= Invalid", "Error"). Peut être vide.
    pub secondaire: String,
    /// `secondaire` est un indicateur d’erreur (la vue le colore).
    pub erreur: bool,
}

pub trait Moteur {
    /// Nom court (journal + sélecteur de la vue).
    fn nom(&self) -> &'static str;

    /// Exécute une action. Les échecs sont absorbés dans l’état (jamais fatals).
    fn execute(&mut self, action: Action);

    fn affichage(&self) -> Affichage;

    /// Point d’entrée de la vue : exécute puis projette.
    fn applique(&mut self, action: Action) -> Affichage {
        tracing::debug!(moteur = self.nom(), ?action, "action");
        self.execute(action);
        self.affichage()
    }
}
