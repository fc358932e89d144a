// src/noyau/decimal.rs
//
// Décimal à virgule fixe : valeur = mantisse / 10^echelle.
// - + - * exacts (l’échelle grandit au besoin)
// - / arrondi à CHIFFRES_DIVISION chiffres, demi vers le haut (loin de zéro)
// - forme canonique : zéros de fin retirés => égalité structurelle fiable

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::ErreurCalcul;

/// Chiffres après la virgule pour les divisions (et donc pour %).
pub const CHIFFRES_DIVISION: u32 = 12;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: u32,
}

impl Decimal {
    /// Construit puis normalise (retire les zéros de fin de la partie fractionnaire).
    fn new(mut mantisse: BigInt, mut echelle: u32) -> Self {
        if mantisse.is_zero() {
            return Self::zero();
        }
        let dix = BigInt::from(10);
        while echelle > 0 && (&mantisse % &dix).is_zero() {
            mantisse /= &dix;
            echelle -= 1;
        }
        Self { mantisse, echelle }
    }

    pub fn zero() -> Self {
        Self {
            mantisse: BigInt::zero(),
            echelle: 0,
        }
    }

    pub fn entier(n: i64) -> Self {
        Self::new(BigInt::from(n), 0)
    }

    pub fn est_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    /// Ramène deux décimaux à la même échelle.
    fn aligne(&self, autre: &Decimal) -> (BigInt, BigInt, u32) {
        let echelle = self.echelle.max(autre.echelle);
        let a = &self.mantisse * pow10(echelle - self.echelle);
        let b = &autre.mantisse * pow10(echelle - autre.echelle);
        (a, b, echelle)
    }

    /// self / diviseur, arrondi à `chiffres` décimales (demi loin de zéro).
    pub fn divise(&self, diviseur: &Decimal, chiffres: u32) -> Result<Decimal, ErreurCalcul> {
        if diviseur.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }

        // (ma / 10^sa) / (mb / 10^sb) = (ma * 10^sb) / (mb * 10^sa)
        let numer = &self.mantisse * pow10(diviseur.echelle) * pow10(chiffres);
        let denom = &diviseur.mantisse * pow10(self.echelle);

        // Ratio::round : demi-cas arrondis loin de zéro (= HALF_UP)
        let q = BigRational::new(numer, denom).round().to_integer();
        Ok(Decimal::new(q, chiffres))
    }
}

/* ------------------------ Opérations exactes ------------------------ */

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, autre: &Decimal) -> Decimal {
        let (a, b, echelle) = self.aligne(autre);
        Decimal::new(a + b, echelle)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, autre: &Decimal) -> Decimal {
        let (a, b, echelle) = self.aligne(autre);
        Decimal::new(a - b, echelle)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, autre: &Decimal) -> Decimal {
        Decimal::new(&self.mantisse * &autre.mantisse, self.echelle + autre.echelle)
    }
}

/* ------------------------ Lecture (texte -> décimal) ------------------------ */

/// Accepte : signe optionnel, chiffres, au plus un point, au moins un chiffre.
/// Ex: "12", "-0", "5.", ".5", "-3.250". Refuse "", "-", ".", "1.2.3", "1e5".
impl FromStr for Decimal {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let refus = || ErreurCalcul::EntreeNonNumerique(s.to_string());

        let (negatif, corps) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (ent, frac) = match corps.split_once('.') {
            Some((e, f)) => (e, f),
            None => (corps, ""),
        };

        let chiffres_ok = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
        if !chiffres_ok(ent) || !chiffres_ok(frac) || (ent.is_empty() && frac.is_empty()) {
            return Err(refus());
        }

        let brut = format!("{ent}{frac}");
        let mut mantisse = BigInt::parse_bytes(brut.as_bytes(), 10).ok_or_else(refus)?;
        if negatif {
            mantisse = -mantisse;
        }

        let echelle = u32::try_from(frac.len()).map_err(|_| refus())?;
        Ok(Decimal::new(mantisse, echelle))
    }
}

/* ------------------------ Affichage (décimal -> texte) ------------------------ */

/// Forme « plain » : jamais de notation scientifique, pas de zéros de fin,
/// jamais de "-0" (la forme canonique de zéro n’a pas de signe).
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neg = self.mantisse.is_negative();
        let mut chiffres = self.mantisse.abs().to_str_radix(10);
        let echelle = self.echelle as usize;

        if echelle > 0 {
            while chiffres.len() <= echelle {
                chiffres.insert(0, '0');
            }
            chiffres.insert(chiffres.len() - echelle, '.');
        }

        if neg {
            write!(f, "-{chiffres}")
        } else {
            f.write_str(&chiffres)
        }
    }
}
