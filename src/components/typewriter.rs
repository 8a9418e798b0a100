use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// One rendered typewriter frame: the full text so far and how long to wait
/// before the next frame.
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

/// Frame generator for the hero typewriter. Each `step` appends one character
/// (or the line break between lines) and reports the delay until the next
/// step; `None` once every line has been typed. The cursor only moves
/// forward, so a finished script stays finished.
pub struct TypewriterScript {
    lines: Vec<Vec<char>>,
    line: usize,
    ch: usize,
    out: String,
    char_delay_ms: u32,
    line_delay_ms: u32,
}

impl TypewriterScript {
    pub fn new<S: AsRef<str>>(lines: &[S], char_delay_ms: u32, line_delay_ms: u32) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().chars().collect()).collect(),
            line: 0,
            ch: 0,
            out: String::new(),
            char_delay_ms,
            line_delay_ms,
        }
    }

    pub fn step(&mut self) -> Option<Frame> {
        let line = self.lines.get(self.line)?;
        if self.ch < line.len() {
            self.out.push(line[self.ch]);
            self.ch += 1;
            Some(Frame {
                text: self.out.clone(),
                delay_ms: self.char_delay_ms,
            })
        } else if self.line + 1 < self.lines.len() {
            // line break between lines only; the final line ends without one
            self.out.push('\n');
            self.line += 1;
            self.ch = 0;
            Some(Frame {
                text: self.out.clone(),
                delay_ms: self.line_delay_ms,
            })
        } else {
            self.line += 1;
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.line >= self.lines.len()
    }

    pub fn rendered(&self) -> &str {
        &self.out
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub lines: Vec<String>,
    #[prop_or(config::TYPE_CHAR_DELAY_MS)]
    pub char_delay_ms: u32,
    #[prop_or(config::TYPE_LINE_DELAY_MS)]
    pub line_delay_ms: u32,
}

fn run_step(
    script: &Rc<RefCell<TypewriterScript>>,
    text: &UseStateSetter<String>,
    pending: &Rc<RefCell<Option<Timeout>>>,
) {
    let frame = script.borrow_mut().step();
    match frame {
        Some(frame) => {
            text.set(frame.text);
            let script = script.clone();
            let text = text.clone();
            let slot = pending.clone();
            let handle = Timeout::new(frame.delay_ms, move || run_step(&script, &text, &slot));
            *pending.borrow_mut() = Some(handle);
        }
        None => {
            pending.borrow_mut().take();
        }
    }
}

/// Types its lines into place one character at a time. The chain is driven by
/// a single owned `Timeout`; unmounting drops the pending handle, which
/// cancels the chain.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let text = use_state(String::new);
    let script = {
        let lines = props.lines.clone();
        let char_delay = props.char_delay_ms;
        let line_delay = props.line_delay_ms;
        use_mut_ref(move || TypewriterScript::new(&lines, char_delay, line_delay))
    };
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let script = Rc::clone(&script);
        let setter = text.setter();
        let pending = Rc::clone(&pending);
        use_effect_with_deps(
            move |_| {
                run_step(&script, &setter, &pending);
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <p class="typewriter" style="white-space: pre-line; margin: 0;">
            { (*text).clone() }
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(script: &mut TypewriterScript) -> String {
        while script.step().is_some() {}
        script.rendered().to_string()
    }

    #[test]
    fn completed_output_joins_lines_without_trailing_break() {
        let mut script = TypewriterScript::new(&["abc", "de"], 45, 700);
        assert_eq!(drain(&mut script), "abc\nde");
        assert!(script.is_finished());
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut script = TypewriterScript::new(&config::HERO_POEM, 45, 700);
        assert_eq!(drain(&mut script), config::HERO_POEM.join("\n"));
    }

    #[test]
    fn line_break_frame_uses_line_delay() {
        let mut script = TypewriterScript::new(&["ab", "c"], 45, 700);
        assert_eq!(script.step().unwrap().delay_ms, 45); // 'a'
        assert_eq!(script.step().unwrap().delay_ms, 45); // 'b'
        let brk = script.step().unwrap(); // '\n'
        assert_eq!(brk.text, "ab\n");
        assert_eq!(brk.delay_ms, 700);
        assert_eq!(script.step().unwrap().text, "ab\nc");
        assert!(script.step().is_none());
    }

    #[test]
    fn finished_script_stays_finished() {
        let mut script = TypewriterScript::new(&["x"], 1, 1);
        drain(&mut script);
        for _ in 0..3 {
            assert!(script.step().is_none());
        }
        assert_eq!(script.rendered(), "x");
    }

    #[test]
    fn empty_input_finishes_immediately() {
        let mut script = TypewriterScript::new::<&str>(&[], 1, 1);
        assert!(script.step().is_none());
        assert_eq!(script.rendered(), "");
    }

    #[test]
    fn empty_middle_line_still_breaks() {
        let mut script = TypewriterScript::new(&["a", "", "b"], 1, 1);
        assert_eq!(drain(&mut script), "a\n\nb");
    }
}
