//! Propriétés (proptest) des deux moteurs.

use proptest::prelude::*;

use super::accumulateur::compute;
use super::analyse::{evalue, Tolerance};
use super::decimal::Decimal;
use super::{Accumulateur, Action, Moteur, Operateur};

/* ------------------------ Stratégies ------------------------ */

/// Touches de saisie seulement (pas d’opérateur, pas de "=").
fn saisie_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0u8..=9u8).prop_map(Action::Chiffre),
        1 => Just(Action::Point),
        1 => Just(Action::Signe),
    ]
}

/// Décimal borné : mantisse i64 modeste, 0 à 6 décimales.
fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..=6u32).prop_map(|(m, e)| {
        let s = if e == 0 {
            m.to_string()
        } else {
            let abs = m.unsigned_abs().to_string();
            let abs = format!("{abs:0>width$}", width = e as usize + 1);
            let (ent, frac) = abs.split_at(abs.len() - e as usize);
            let signe = if m < 0 { "-" } else { "" };
            format!("{signe}{ent}.{frac}")
        };
        s.parse().unwrap()
    })
}

/// Retire les zéros de fin de partie fractionnaire (et le point orphelin).
fn sans_zeros_de_fin(s: &str) -> String {
    let mut t = s.to_string();
    if t.contains('.') {
        while t.ends_with('0') {
            t.pop();
        }
        if t.ends_with('.') {
            t.pop();
        }
    }
    if t == "-0" || t.is_empty() || t == "-" {
        t = "0".into();
    }
    t
}

proptest! {
    /// format(parse(saisie)) == saisie, aux zéros de fin et au "-0" près.
    #[test]
    fn prop_saisie_aller_retour(touches in prop::collection::vec(saisie_strategy(), 0..30)) {
        let mut acc = Accumulateur::new();
        for t in touches {
            acc.execute(t);
        }
        let saisie = acc.saisie().to_string();
        let relu: Decimal = saisie.parse().unwrap();
        prop_assert_eq!(relu.to_string(), sans_zeros_de_fin(&saisie));
    }

    /// Backspace répété : finit à "0" puis reste à "0".
    #[test]
    fn prop_backspace_converge(touches in prop::collection::vec(saisie_strategy(), 1..30)) {
        let mut acc = Accumulateur::new();
        for t in touches {
            acc.execute(t);
        }
        let n = acc.saisie().chars().count();
        for _ in 0..=n {
            acc.backspace();
        }
        prop_assert_eq!(acc.saisie(), "0");
        acc.backspace();
        prop_assert_eq!(acc.saisie(), "0");
    }

    /// + - * exacts : aller-retour sans dérive.
    #[test]
    fn prop_compute_exact(a in decimal_strategy(), b in decimal_strategy()) {
        let somme = compute(&a, &b, Operateur::Plus).unwrap();
        prop_assert_eq!(compute(&somme, &b, Operateur::Moins).unwrap(), a.clone());

        let ab = compute(&a, &b, Operateur::Fois).unwrap();
        let ba = compute(&b, &a, Operateur::Fois).unwrap();
        prop_assert_eq!(&ab, &ba);

        // produit exact => division retombe juste quand le quotient est court
        if !b.est_zero() {
            prop_assert_eq!(compute(&ab, &b, Operateur::Divise).unwrap(), a);
        }
    }

    /// Division par zéro : toujours un échec explicite.
    #[test]
    fn prop_division_par_zero(a in decimal_strategy()) {
        prop_assert!(compute(&a, &Decimal::zero(), Operateur::Divise).is_err());
    }

    /// Priorités : a+b*c et (a+b)*c sur des entiers (exacts en f64).
    #[test]
    fn prop_priorites(a in 0i64..10_000, b in 0i64..10_000, c in 0i64..10_000) {
        let s1 = format!("{a}+{b}*{c}");
        let s2 = format!("({a}+{b})*{c}");
        prop_assert_eq!(evalue(&s1, Tolerance::Stricte).unwrap(), (a + b * c) as f64);
        prop_assert_eq!(evalue(&s2, Tolerance::Stricte).unwrap(), ((a + b) * c) as f64);
    }

    /// Un opérateur final : refusé en strict, ignoré (facteur 0) en souple.
    #[test]
    fn prop_operateur_final(a in 1i64..100_000) {
        let s = format!("{a}+");
        prop_assert!(evalue(&s, Tolerance::Stricte).is_err());
        prop_assert_eq!(evalue(&s, Tolerance::Souple).unwrap(), a as f64);
    }

    /// L’analyseur ne panique jamais, quelle que soit l’entrée.
    #[test]
    fn prop_analyse_sans_panique(s in "[0-9+*/().× -]{0,40}") {
        let _ = evalue(&s, Tolerance::Stricte);
        let _ = evalue(&s, Tolerance::Souple);
    }
}
