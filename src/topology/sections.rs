/// Разбить вывод `xrandr --verbose` на секции.
///
/// Новая секция начинается со строки, которая не начинается с пробельного
/// символа. Перевод строки перед заголовком служит разделителем и в секции не
/// попадает, поэтому `sections.join("\n")` восстанавливает исходный текст.
pub fn split_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    if text.is_empty() {
        return sections;
    }

    let mut start = 0;
    for (index, _) in text.match_indices('\n') {
        let starts_header = text[index + 1..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace());

        if starts_header {
            sections.push(&text[start..index]);
            start = index + 1;
        }
    }
    sections.push(&text[start..]);

    sections
}
