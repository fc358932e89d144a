// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, la calculatrice n’a pas de champ texte) :
// - caractères tapés : chiffres, . , + - * / × ÷ = %
// - Enter = "=", Backspace = DEL, Escape / Delete = AC
// - texte et touches d’une frame sont appliqués dans l’ordre d’arrivée

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Action;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = ctx.input(|i| actions_clavier(&i.events));
        for a in actions {
            self.action(a);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements d’une frame => actions, dans l’ordre d’arrivée.
fn actions_clavier(evenements: &[egui::Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for ev in evenements {
        match ev {
            egui::Event::Text(t) => actions.extend(t.chars().filter_map(Action::depuis_touche)),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => actions.push(Action::Egal),
                egui::Key::Backspace => actions.push(Action::Retour),
                egui::Key::Escape | egui::Key::Delete => actions.push(Action::Efface),
                _ => {}
            },
            _ => {}
        }
    }
    actions
}
