//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler les deux moteurs avec des suites de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - nombre d’actions borné
//! - budget temps global
//! - invariants vérifiés après CHAQUE action

use std::time::{Duration, Instant};

use super::decimal::Decimal;
use super::expression::{format_nombre, Apercu};
use super::{Accumulateur, Action, EditeurExpression, Moteur, Operateur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_operateur(rng: &mut Rng) -> Operateur {
    Operateur::TOUS[rng.pick(4) as usize]
}

/// Chiffres surreprésentés (sinon on n’entre presque jamais de nombre).
fn gen_action(rng: &mut Rng) -> Action {
    match rng.pick(16) {
        0..=6 => Action::Chiffre(rng.pick(10) as u8),
        7 => Action::Point,
        8 | 9 => Action::Operateur(gen_operateur(rng)),
        10 => Action::Retour,
        11 => Action::Signe,
        12 => Action::Pourcent,
        13 | 14 => Action::Egal,
        _ => {
            // effacement rare : on veut des états longs
            if rng.pick(4) == 0 {
                Action::Efface
            } else {
                Action::Chiffre(rng.pick(10) as u8)
            }
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_saisie_canonique(saisie: &str) {
    assert!(
        saisie.parse::<Decimal>().is_ok(),
        "saisie illisible: {saisie:?}"
    );
    assert!(saisie.matches('.').count() <= 1, "plusieurs points: {saisie:?}");

    let corps = saisie.strip_prefix('-').unwrap_or(saisie);
    assert!(!corps.starts_with('-'), "double signe: {saisie:?}");
    if corps.len() > 1 && corps.starts_with('0') {
        assert!(
            corps[1..].starts_with('.'),
            "zéro de tête: {saisie:?}"
        );
    }
}

fn check_accumulateur(acc: &Accumulateur) {
    check_saisie_canonique(acc.saisie());

    if acc.operateur_en_attente().is_some() {
        assert!(acc.valeur_memoire().is_some());
    }

    let aff = acc.affichage();
    let sec = aff.secondaire;
    assert!(
        sec == "=" || sec == "= Invalid" || sec.contains(" = "),
        "aperçu inattendu: {sec:?}"
    );
    assert_eq!(aff.erreur, sec == "= Invalid", "drapeau d’erreur: {sec:?}");
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_accumulateur_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut acc = Accumulateur::new();

    let mut vu_invalide = false;
    let mut vu_resultat = false;

    for _ in 0..3000 {
        budget(t0, max);

        let action = gen_action(&mut rng);
        let aff = acc.applique(action);
        check_accumulateur(&acc);

        vu_invalide |= aff.secondaire == "= Invalid";
        vu_resultat |= action == Action::Egal && acc.vient_d_evaluer();

        // garde-fou : les saisies ne doivent pas exploser (on efface de temps en temps)
        if acc.saisie().len() > 60 {
            acc.applique(Action::Efface);
        }
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(vu_invalide, "aucune division par zéro rencontrée");
    assert!(vu_resultat, "aucun résultat validé");
}

#[test]
fn fuzz_safe_expression_erreurs_seulement_a_la_validation() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut ed = EditeurExpression::new();

    let mut vu_erreur = false;
    let mut vu_validation = false;

    for _ in 0..2000 {
        budget(t0, max);

        let action = gen_action(&mut rng);
        let avant = ed.expression().to_string();
        ed.applique(action);

        let validant = matches!(action, Action::Egal | Action::Pourcent);
        if *ed.apercu() == Apercu::Erreur {
            assert!(validant, "Error hors validation: {action:?} sur {avant:?}");
            vu_erreur = true;
        }

        // validation réussie => l’expression est un nombre formaté
        if validant && *ed.apercu() != Apercu::Erreur && !ed.expression().is_empty() {
            let v = EditeurExpression::evaluate(ed.expression());
            if let Ok(v) = v {
                assert_eq!(format_nombre(v), ed.expression());
            }
            vu_validation = true;
        }

        if ed.expression().len() > 80 {
            ed.applique(Action::Efface);
        }
    }

    assert!(vu_erreur, "aucune erreur de syntaxe rencontrée");
    assert!(vu_validation, "aucune validation réussie");
}

#[test]
fn fuzz_safe_determinisme() {
    fn rejoue(seed: u64) -> (String, String) {
        let mut rng = Rng::new(seed);
        let mut acc = Accumulateur::new();
        let mut ed = EditeurExpression::new();
        for _ in 0..500 {
            let a = gen_action(&mut rng);
            acc.applique(a);
            ed.applique(a);
        }
        (acc.affichage().principal, ed.affichage().principal)
    }

    // Même seed => mêmes touches => mêmes sorties
    assert_eq!(rejoue(42), rejoue(42));
}

#[test]
fn fuzz_safe_moteurs_d_accord_sur_les_entiers() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let a = rng.pick(1000);
        let b = rng.pick(1000);
        // + - * : exacts en f64 sur ces bornes
        let op = [Operateur::Plus, Operateur::Moins, Operateur::Fois][rng.pick(3) as usize];

        let mut touches: Vec<Action> = Vec::new();
        touches.extend(a.to_string().chars().filter_map(Action::depuis_touche));
        touches.push(Action::Operateur(op));
        touches.extend(b.to_string().chars().filter_map(Action::depuis_touche));
        touches.push(Action::Egal);

        let mut acc = Accumulateur::new();
        let mut ed = EditeurExpression::new();
        for t in &touches {
            acc.applique(*t);
            ed.applique(*t);
        }

        assert_eq!(
            acc.affichage().principal,
            ed.affichage().principal,
            "désaccord sur {a} {} {b}",
            op.symbole()
        );
    }
}
