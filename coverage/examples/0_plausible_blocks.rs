use unicode_coverage::properties::{is_plausible_gap, is_printable};
use unicode_coverage::UNICODE_BLOCKS;

/// сколько кодпоинтов каждого блока может попасть в отчёт о пропусках?
/// сколько из них печатных по данным ICU?
fn main()
{
    println!();

    for block in UNICODE_BLOCKS {
        let printable = block.range.codes().filter(|&code| is_printable(code)).count();
        let plausible = block.range.codes().filter(|&code| is_plausible_gap(code)).count();

        println!(
            "{:<40} {}  всего: {:>4}, печатных: {:>4}, учитываемых: {:>4}",
            block.name,
            block.range.label(),
            block.range.len(),
            printable,
            plausible,
        );
    }

    println!();
}
