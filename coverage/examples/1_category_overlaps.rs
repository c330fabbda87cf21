use unicode_coverage::CATEGORY_RANGES;

/// какие категории таблицы диапазонов пересекаются между собой?
/// один и тот же символ каталога может оказаться пропуском сразу в нескольких категориях
fn main()
{
    println!();

    for (i, left) in CATEGORY_RANGES.iter().enumerate() {
        for right in CATEGORY_RANGES.iter().skip(i + 1) {
            for a in left.ranges {
                for b in right.ranges {
                    let start = a.start.max(b.start);
                    let end = a.end.min(b.end);

                    if start > end {
                        continue;
                    }

                    println!(
                        "{} / {}: U+{:04X} ..= U+{:04X} ({} кодпоинтов)",
                        left.name,
                        right.name,
                        start,
                        end,
                        end - start + 1
                    );
                }
            }
        }
    }

    println!();
}
