use core::fmt;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Сколько знаков после точки хранится точно.
pub const DECIMALS: u32 = 8;

/// Сколько минимальных единиц в одной фишке.
pub const UNITS_PER_CHIP: u64 = 10u64.pow(DECIMALS);

/// Денежная сумма в минимальных единицах (1e-8 фишки). Обёртка над u64,
/// чтобы не путать с обычными числами и чтобы "5.5" складывалось ровно,
/// без float-ошибок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn from_units(units: u64) -> Self {
        Chips(units)
    }

    /// Целое число фишек. None при переполнении.
    pub fn from_whole(chips: u64) -> Option<Self> {
        chips.checked_mul(UNITS_PER_CHIP).map(Chips)
    }

    pub fn units(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / UNITS_PER_CHIP as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl fmt::Display for Chips {
    /// Формат `5.50`, `0.00`, `0.001`: минимум два знака, хвостовые нули убираются.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = format!("{:0width$}", self.0 % UNITS_PER_CHIP, width = DECIMALS as usize);
        let trimmed = frac.trim_end_matches('0');
        let frac = if trimmed.len() < 2 { &frac[..2] } else { trimmed };
        write!(f, "{}.{}", self.0 / UNITS_PER_CHIP, frac)
    }
}

/// Разбор десятичной записи прямо из строки, без f64.
///
/// Принимает `5`, `+5`, `5.5`, `.5`, `5.`, `1e3`, `2.5E-2`. Отрицательные
/// числа, `NaN`, `inf` и мусор — ошибка. Знаки после восьмого округляются
/// до ближайшей единицы; ненулевая сумма меньше одной единицы даёт одну
/// единицу, а не ноль.
impl FromStr for Chips {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unsigned = s.strip_prefix('+').unwrap_or(s);

        let (mantissa, exp) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exp = unsigned[pos + 1..]
                    .parse::<i32>()
                    .map_err(|_| format!("Invalid exponent: {s}"))?;
                (&unsigned[..pos], exp)
            }
            None => (unsigned, 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(format!("Invalid amount: {s}"));
        }

        let mut digits = Vec::with_capacity(int_part.len() + frac_part.len());
        for b in int_part.bytes().chain(frac_part.bytes()) {
            if !b.is_ascii_digit() {
                return Err(format!("Invalid amount: {s}"));
            }
            digits.push(u64::from(b - b'0'));
        }

        // Первые `whole` цифр дают целые единицы, остальные — отбрасываемый хвост.
        let whole = int_part.len() as i64 + i64::from(exp) + i64::from(DECIMALS);
        let overflow = || format!("Amount too large: {s}");

        let mut units: u64 = 0;
        let mut pos: i64 = 0;
        while pos < whole {
            let d = digits.get(pos as usize).copied().unwrap_or(0);
            if units == 0 && d == 0 && pos >= digits.len() as i64 {
                // дальше одни нули
                break;
            }
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add(d))
                .ok_or_else(overflow)?;
            pos += 1;
        }

        let tail_start = whole.max(0) as usize;
        let round_up = whole >= 0 && digits.get(tail_start).is_some_and(|d| *d >= 5);
        if round_up {
            units = units.checked_add(1).ok_or_else(overflow)?;
        }

        if units == 0 && digits.iter().any(|d| *d != 0) {
            units = 1;
        }

        Ok(Chips(units))
    }
}
