use std::rc::Rc;

use freetools_core::{Typewriter, WordRotation};
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroWordsProps {
    pub words: &'static [&'static str],
}

enum HeroWordsAction {
    Tick,
}

struct RotationModel(WordRotation);

impl Reducible for RotationModel {
    type Action = HeroWordsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            HeroWordsAction::Tick => {
                let mut rotation = self.0.clone();
                rotation.tick();
                Rc::new(RotationModel(rotation))
            }
        }
    }
}

/// Crossfades between the words on a fixed interval. Every word stays in the
/// DOM; only the active one gets the `active` class.
#[function_component(RotatingWords)]
pub fn rotating_words(props: &HeroWordsProps) -> Html {
    let word_count = props.words.len();
    let rotation = use_reducer(move || RotationModel(WordRotation::new(word_count)));

    {
        let rotation = rotation.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(WordRotation::INTERVAL_MS, move || {
                    rotation.dispatch(HeroWordsAction::Tick);
                });
                // Dropping the handle clears the interval.
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <span class="rotating-words">
            { for props.words.iter().enumerate().map(|(index, word)| {
                let active = rotation.0.is_active(index);
                html! {
                    <span
                        key={*word}
                        class={classes!("rotating-word", active.then_some("active"))}
                        aria-hidden={(!active).to_string()}
                    >
                        {*word}
                    </span>
                }
            }) }
        </span>
    }
}

struct TypewriterModel(Typewriter);

impl Reducible for TypewriterModel {
    type Action = HeroWordsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            HeroWordsAction::Tick => {
                let mut typewriter = self.0.clone();
                typewriter.tick();
                Rc::new(TypewriterModel(typewriter))
            }
        }
    }
}

/// Types each word out, holds it, then deletes it before moving on.
///
/// One timeout is pending at any time. It is rescheduled after every tick
/// with the delay the current phase asks for and cancelled on unmount.
#[function_component(TypewriterWords)]
pub fn typewriter_words(props: &HeroWordsProps) -> Html {
    let words = props.words;
    let typewriter = use_reducer(move || TypewriterModel(Typewriter::new(words.iter().copied())));

    {
        let handle = typewriter.clone();
        use_effect_with_deps(
            move |state: &Typewriter| {
                let timeout = Timeout::new(state.next_delay_ms(), move || {
                    handle.dispatch(HeroWordsAction::Tick);
                });
                move || drop(timeout)
            },
            typewriter.0.clone(),
        );
    }

    html! {
        <span class="typewriter">
            <span class="typewriter-text">{ typewriter.0.current_text() }</span>
            <span class={classes!("typewriter-cursor", typewriter.0.is_deleting().then_some("deleting"))}>{"|"}</span>
        </span>
    }
}
