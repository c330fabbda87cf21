use unicode_coverage::format_code;

/// ширина разделителей в текстовом выводе
pub const RULE_WIDTH: usize = 60;

/// сколько процентов приходится на одну ячейку полосы покрытия
const BAR_STEP: f64 = 10.0;

/// полоса покрытия: одна ячейка на каждые полные 10%
pub fn bar(percentage: f64) -> String
{
    let cells = (percentage / BAR_STEP).floor().max(0.0) as usize;

    "█".repeat(cells)
}

/// горизонтальный разделитель
pub fn rule(c: char) -> String
{
    c.to_string().repeat(RULE_WIDTH)
}

/// обрезать строку до заданного количества символов
pub fn truncate(text: &str, max_chars: usize) -> String
{
    text.chars().take(max_chars).collect()
}

/// представить список кодпоинтов в текстовом виде: U+2190, U+2191
pub fn format_code_list(codes: &[u32]) -> String
{
    codes
        .iter()
        .map(|&code| format_code(code))
        .collect::<Vec<String>>()
        .join(", ")
}
