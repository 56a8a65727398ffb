use crate::domain::chips::Chips;

/// Разобрать ставку из свободного ввода.
///
/// Нечисловой, пустой или неположительный ввод даёт `Chips::ZERO`
/// (в банк ничего не идёт, ошибки нет). Положительная сумма берётся
/// как есть, без округления до цента.
pub fn parse_bet(input: &str) -> Chips {
    input.parse::<Chips>().unwrap_or(Chips::ZERO)
}
