//! Generators for the 6-8 band: colors, shapes, animals, simple numbers,
//! picture analogies and size ordering.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::{canned, QuestionBody, Template};

const COLORS: [&str; 6] = [
    "Red 🔴",
    "Blue 🔵",
    "Green 🟢",
    "Yellow 🟡",
    "Orange 🟠",
    "Purple 🟣",
];

const SHAPES: [&str; 6] = [
    "⭐ Star",
    "▲ Triangle",
    "■ Square",
    "● Circle",
    "❤️ Heart",
    "♦️ Diamond",
];

const ANIMALS: [&str; 6] = [
    "🐶 Dog",
    "🐱 Cat",
    "🐰 Rabbit",
    "🐻 Bear",
    "🦁 Lion",
    "🐘 Elephant",
];

const SIZES: [&str; 6] = ["Tiny", "Small", "Medium", "Large", "Big", "Huge"];

const SIZE_SETS: [&[&str]; 4] = [
    &["Small", "Medium", "Large"],
    &["Tiny", "Small", "Big", "Huge"],
    &["Baby", "Child", "Adult"],
    &["Coin", "Ball", "Box", "Car"],
];

const HIDDEN: &str = "❓";

/// Four distinct colors with one hidden at a random position.
pub(super) fn color_pattern<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    let mut pattern: Vec<&str> = COLORS.choose_multiple(rng, 4).copied().collect();
    let missing = rng.random_range(0..pattern.len());
    let correct = pattern[missing];
    pattern[missing] = HIDDEN;
    let text = format!("What color comes next?\n{}", pattern.join(" → "));
    QuestionBody::sampled(rng, text, &COLORS, correct)
}

/// Three consecutive palette entries; the fourth completes the run.
fn palette_run<R: Rng + ?Sized>(rng: &mut R, palette: &[&'static str]) -> (Vec<&'static str>, &'static str) {
    let start = rng.random_range(0..palette.len());
    let run = (0..3).map(|i| palette[(start + i) % palette.len()]).collect();
    (run, palette[(start + 3) % palette.len()])
}

pub(super) fn shape_pattern<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    let (run, correct) = palette_run(rng, &SHAPES);
    let text = format!("Complete the pattern:\n{} → ?", run.join(" → "));
    QuestionBody::sampled(rng, text, &SHAPES, correct)
}

pub(super) fn animal_pattern<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    let (run, correct) = palette_run(rng, &ANIMALS);
    let text = format!("Which animal comes next?\n{} → {HIDDEN}", run.join(" → "));
    QuestionBody::sampled(rng, text, &ANIMALS, correct)
}

pub(super) fn number_sequence<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const OPTIONS: [&str; 4] = ["5", "6", "10", "25"];
    const TEMPLATES: [Template; 4] = [
        Template { prompt: "1, 2, 3, 4, ?", options: OPTIONS, answer: "5" },
        Template { prompt: "2, 4, 6, 8, ?", options: OPTIONS, answer: "10" },
        Template { prompt: "5, 10, 15, 20, ?", options: OPTIONS, answer: "25" },
        Template { prompt: "10, 9, 8, 7, ?", options: OPTIONS, answer: "6" },
    ];
    canned(rng, "Complete the number sequence:", &TEMPLATES)
}

pub(super) fn picture_analogy<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 4] = [
        Template {
            prompt: "🐶 is to Dog = 🐱 is to ?",
            options: ["Cat", "Dog", "Bird", "Fish"],
            answer: "Cat",
        },
        Template {
            prompt: "🍎 is to Apple = 🍌 is to ?",
            options: ["Banana", "Apple", "Orange", "Grape"],
            answer: "Banana",
        },
        Template {
            prompt: "☀️ is to Sun = 🌙 is to ?",
            options: ["Moon", "Star", "Sun", "Cloud"],
            answer: "Moon",
        },
        Template {
            prompt: "🚗 is to Car = ✈️ is to ?",
            options: ["Plane", "Car", "Train", "Boat"],
            answer: "Plane",
        },
    ];
    canned(rng, "Complete the analogy:", &TEMPLATES)
}

/// A size-ordered set with one member hidden.
pub(super) fn size_order<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    let set = SIZE_SETS[rng.random_range(0..SIZE_SETS.len())];
    let missing = rng.random_range(0..set.len());
    let correct = set[missing];
    let display: Vec<&str> = set
        .iter()
        .enumerate()
        .map(|(i, item)| if i == missing { "?" } else { *item })
        .collect();
    let text = format!("Complete the size order:\n{}", display.join(" < "));
    QuestionBody::sampled(rng, text, &SIZES, correct)
}
