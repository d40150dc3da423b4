/// Split raw text into sentences, preserving original case.
///
/// Each line is segmented independently (a line break always ends a sentence), then
/// split at runs of `.`, `!` or `?` followed by whitespace or end of line. Terminating
/// punctuation stays attached. A terminator embedded in a token ("3.14", "e.g.x") does
/// not end a sentence. Whitespace-only fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        split_line(line, &mut sentences);
    }
    sentences
}

fn split_line(line: &str, out: &mut Vec<String>) {
    let mut start = 0;
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        // swallow the whole terminator run: "...", "?!"
        let mut end = i + c.len_utf8();
        while let Some(&(j, d)) = chars.peek() {
            if is_terminator(d) {
                end = j + d.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        let at_boundary = match chars.peek() {
            Some(&(_, d)) => d.is_whitespace(),
            None => true,
        };
        if at_boundary {
            push_trimmed(&line[start..end], out);
            start = end;
        }
    }
    push_trimmed(&line[start..], out);
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_trimmed(fragment: &str, out: &mut Vec<String>) {
    let s = fragment.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}
