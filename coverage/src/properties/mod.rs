mod general_category;

pub use general_category::GeneralCategory;

/// начиная с этого кодпоинта идут пиктографические блоки: пропуск в них считается значимым,
/// даже если место под символ ещё не назначено
pub const PICTOGRAPHIC_FLOOR: u32 = 0x1F300;

/// пробел - единственный разделитель, который считается печатным
const SPACE: u32 = 0x20;

/// печатный символ: не относится к управляющим (C) и разделителям (Z), кроме пробела
pub fn is_printable(code: u32) -> bool
{
    if code == SPACE {
        return true;
    }

    let gc = GeneralCategory::of(code);

    !gc.is_control() && !gc.is_separator()
}

/// может-ли отсутствующий кодпоинт считаться пропуском в каталоге
///
/// суррогаты и значения за пределами Unicode символом быть не могут и не учитываются никогда
pub fn is_plausible_gap(code: u32) -> bool
{
    if char::from_u32(code).is_none() {
        return false;
    }

    code >= PICTOGRAPHIC_FLOOR || is_printable(code)
}
