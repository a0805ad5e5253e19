use crate::errors::GenerateError;
use crate::textgen::TextService;

/// Offline backend. Skips the instruction paragraph of the prompt and returns
/// the leading sentences of what follows, up to a character budget. It cannot
/// pick folders, so pair it with an explicit `--folder`.
pub struct ExtractiveTextService {
    max_chars: usize,
}

impl Default for ExtractiveTextService {
    fn default() -> Self {
        Self { max_chars: 400 }
    }
}

impl TextService for ExtractiveTextService {
    fn backend(&self) -> &'static str {
        "extractive"
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = match prompt.split_once("\n\n") {
            Some((_, rest)) if !rest.trim().is_empty() => rest,
            _ => prompt,
        };

        let mut out = String::new();
        for sentence in body.split_terminator(['.', '!', '?']) {
            let s = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
            if s.is_empty() {
                continue;
            }
            if !out.is_empty() && out.len() + s.len() + 2 > self.max_chars {
                break;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&s);
            out.push('.');
        }
        if out.is_empty() {
            return Err(GenerateError::Unavailable);
        }
        if out.len() > self.max_chars {
            let cut = (0..=self.max_chars)
                .rev()
                .find(|&i| out.is_char_boundary(i))
                .unwrap_or(0);
            out.truncate(cut);
        }
        Ok(out)
    }
}
