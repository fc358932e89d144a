// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux lignes : principale (saisie / expression) + secondaire (aperçu / erreur)
// - Pavé 4 colonnes, gros boutons (tactile)
// - Sélecteur de moteur (repart d’un état neuf)
//
// La vue ne calcule rien : chaque clic devient une Action.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Action, Operateur};
use crate::reglages::ChoixMoteur;

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Pavé, ligne par ligne (4 colonnes).
const PAVE: [[Action; 4]; 5] = [
    [
        Action::Efface,
        Action::Retour,
        Action::Pourcent,
        Action::Operateur(Operateur::Divise),
    ],
    [
        Action::Chiffre(7),
        Action::Chiffre(8),
        Action::Chiffre(9),
        Action::Operateur(Operateur::Fois),
    ],
    [
        Action::Chiffre(4),
        Action::Chiffre(5),
        Action::Chiffre(6),
        Action::Operateur(Operateur::Moins),
    ],
    [
        Action::Chiffre(1),
        Action::Chiffre(2),
        Action::Chiffre(3),
        Action::Operateur(Operateur::Plus),
    ],
    [
        Action::Signe,
        Action::Chiffre(0),
        Action::Point,
        Action::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_choix_moteur(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_choix_moteur(&mut self, ui: &mut egui::Ui) {
        let mut choix = self.choix();
        ui.horizontal(|ui| {
            ui.label("Moteur :");
            for c in ChoixMoteur::TOUS {
                ui.selectable_value(&mut choix, c, c.libelle());
            }
        });
        self.change_moteur(choix);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let aff = self.affichage().clone();

        // Affichage lecture seule “stable”, aligné à droite comme une calculatrice.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&aff.principal).monospace().size(32.0));

                    let secondaire = egui::RichText::new(&aff.secondaire).monospace().size(18.0);
                    if aff.erreur {
                        ui.label(secondaire.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(secondaire.weak());
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for action in ligne {
                        self.bouton(ui, action);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, action: Action) {
        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(action.libelle()).size(20.0)),
        );
        if resp.clicked() {
            self.action(action);
        }
    }
}
