use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TYPEWRITER_INTERVAL_MS;
use crate::fonts::{text_style, FontPreset, FontRole};

/// Reveals a list of lines one character at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    lines: Vec<String>,
    displayed: Vec<String>,
    line_idx: usize,
    char_idx: usize,
}

impl Typewriter {
    pub fn new(lines: Vec<String>) -> Self {
        let displayed = vec![String::new(); lines.len()];
        Self {
            lines,
            displayed,
            line_idx: 0,
            char_idx: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.line_idx >= self.lines.len()
    }

    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }

    /// Line currently being typed, if any.
    pub fn cursor_line(&self) -> Option<usize> {
        (!self.is_done()).then_some(self.line_idx)
    }

    /// Advances by one step. Returns false once every line is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        if self.char_idx > self.lines[self.line_idx].chars().count() {
            self.line_idx += 1;
            self.char_idx = 0;
            if self.is_done() {
                return false;
            }
        }
        let line = &self.lines[self.line_idx];
        self.displayed[self.line_idx] = line.chars().take(self.char_idx).collect();
        self.char_idx += 1;
        true
    }
}

/// Splits a headline after its first word, keeping the space with the lead:
/// "Coming December 2025" becomes ("Coming ", "December 2025").
pub fn split_lead(text: &str) -> (&str, &str) {
    match text.find(' ') {
        Some(i) => text.split_at(i + 1),
        None => (text, ""),
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub lines: Vec<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub preset: FontPreset,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterProps) -> Html {
    let state = {
        let lines = props.lines.clone();
        use_state(move || Typewriter::new(lines))
    };

    {
        let deps = (*state).clone();
        let state = state.clone();
        use_effect_with_deps(
            move |typewriter: &Typewriter| {
                let timeout = (!typewriter.is_done()).then(|| {
                    let mut next = typewriter.clone();
                    Timeout::new(TYPEWRITER_INTERVAL_MS, move || {
                        next.tick();
                        state.set(next);
                    })
                });
                // dropping a pending Timeout cancels it
                move || drop(timeout)
            },
            deps,
        );
    }

    let cursor = |line: usize| {
        if state.cursor_line() == Some(line) {
            html! { <span class="type-cursor">{"|"}</span> }
        } else {
            html! {}
        }
    };

    html! {
        <div class={props.class.clone()}>
            { for state.displayed().iter().enumerate().map(|(i, text)| {
                if i == 0 {
                    html! {
                        <div>
                            if !text.is_empty() {
                                <span style={text_style(props.preset, FontRole::Typewriter)}>{split_lead(text).0.to_string()}</span>
                                <span style={text_style(props.preset, FontRole::TypewriterMain)}>{split_lead(text).1.to_string()}</span>
                            }
                            { cursor(i) }
                        </div>
                    }
                } else {
                    html! {
                        <div class="typewriter-sub" style={text_style(props.preset, FontRole::TypewriterSchool)}>
                            {text.clone()}
                            { cursor(i) }
                        </div>
                    }
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::new(lines(&["abc", "de"]));
        assert!(tw.tick());
        assert_eq!(tw.displayed()[0], "");
        assert!(tw.tick());
        assert_eq!(tw.displayed()[0], "a");
        tw.tick();
        tw.tick();
        assert_eq!(tw.displayed()[0], "abc");
        assert_eq!(tw.cursor_line(), Some(0));
    }

    #[test]
    fn moves_to_next_line_and_finishes() {
        let mut tw = Typewriter::new(lines(&["ab", "c"]));
        let mut steps = 0;
        while tw.tick() {
            steps += 1;
            assert!(steps < 100);
        }
        // "ab" takes 3 reveals (0..=2 chars), "c" takes 2
        assert_eq!(steps, 5);
        assert_eq!(tw.displayed(), &["ab".to_string(), "c".to_string()]);
        assert!(tw.is_done());
        assert_eq!(tw.cursor_line(), None);
        assert!(!tw.tick());
    }

    #[test]
    fn cursor_follows_the_line_being_typed() {
        let mut tw = Typewriter::new(lines(&["a", "b"]));
        tw.tick();
        tw.tick();
        assert_eq!(tw.cursor_line(), Some(0));
        tw.tick();
        assert_eq!(tw.cursor_line(), Some(1));
        assert_eq!(tw.displayed()[1], "");
    }

    #[test]
    fn handles_multibyte_text() {
        let mut tw = Typewriter::new(lines(&["é→"]));
        tw.tick();
        tw.tick();
        assert_eq!(tw.displayed()[0], "é");
        tw.tick();
        assert_eq!(tw.displayed()[0], "é→");
    }

    #[test]
    fn lead_word_is_split_from_the_rest() {
        assert_eq!(split_lead("Coming December 2025"), ("Coming ", "December 2025"));
        assert_eq!(split_lead("Com"), ("Com", ""));
        assert_eq!(split_lead("Coming "), ("Coming ", ""));
    }

    #[test]
    fn no_lines_is_immediately_done() {
        let mut tw = Typewriter::new(Vec::new());
        assert!(tw.is_done());
        assert!(!tw.tick());
    }
}
