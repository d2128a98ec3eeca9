//! Generators for the 12-14 band.

use rand::Rng;

use super::{canned, QuestionBody, Template};

const ROTATIONS: [&str; 4] = ["0°", "90°", "180°", "270°"];

pub(super) fn advanced_matrix<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 3] = [
        Template {
            prompt: "[2][4][6]\n[8][10][12]\n[14][16][?]",
            options: ["18", "20", "22", "24"],
            answer: "18",
        },
        Template {
            prompt: "[3][6][9]\n[12][15][18]\n[21][24][?]",
            options: ["25", "26", "27", "30"],
            answer: "27",
        },
        Template {
            prompt: "[1][4][9]\n[16][25][36]\n[49][64][?]",
            options: ["72", "81", "90", "100"],
            answer: "81",
        },
    ];
    canned(rng, "Complete the matrix pattern:", &TEMPLATES)
}

pub(super) fn abstract_reasoning<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 5] = [
        Template {
            prompt: "If all squares are rectangles, and some rectangles are red, then:",
            options: [
                "Some squares are red",
                "All red things are squares",
                "No squares are red",
                "Cannot determine",
            ],
            answer: "Cannot determine",
        },
        Template {
            prompt: "Find the next item in the sequence:\n2, 4, 8, 16, ?",
            options: ["24", "32", "30", "28"],
            answer: "32",
        },
        Template {
            prompt: "Find the next item in the sequence:\n1, 1, 2, 3, 5, ?",
            options: ["6", "7", "8", "9"],
            answer: "8",
        },
        Template {
            prompt: "Find the next item in the sequence:\nA, C, E, G, ?",
            options: ["H", "I", "J", "K"],
            answer: "I",
        },
        Template {
            prompt: "Find the next item in the sequence:\n1, 4, 9, 16, ?",
            options: ["20", "25", "30", "36"],
            answer: "25",
        },
    ];
    canned(rng, "", &TEMPLATES)
}

pub(super) fn complex_analogy<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 4] = [
        Template {
            prompt: "Physics : Newton :: Biology : ?",
            options: ["Darwin", "Einstein", "Galileo", "Pasteur"],
            answer: "Darwin",
        },
        Template {
            prompt: "Author : Book :: Architect : ?",
            options: ["Building", "Blueprint", "Design", "Structure"],
            answer: "Building",
        },
        Template {
            prompt: "Chemistry : Element :: Linguistics : ?",
            options: ["Word", "Sentence", "Grammar", "Language"],
            answer: "Word",
        },
        Template {
            prompt: "Mathematics : Theorem :: Law : ?",
            options: ["Precedent", "Case", "Judge", "Verdict"],
            answer: "Precedent",
        },
    ];
    canned(rng, "Complex Analogy:", &TEMPLATES)
}

/// Either the cube-rotation item or a procedural quarter-turn sequence.
pub(super) fn spatial_reasoning<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    if rng.random_bool(0.5) {
        return rotation_sequence(rng);
    }
    const CUBE: [Template; 1] = [Template {
        prompt: "If a cube is rotated 90° clockwise, which face is on top?",
        options: ["Front face", "Right face", "Top face", "Back face"],
        answer: "Right face",
    }];
    canned(rng, "", &CUBE)
}

fn rotation_sequence<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    let start = rng.random_range(0..ROTATIONS.len());
    let shown: Vec<&str> = (0..3)
        .map(|i| ROTATIONS[(start + i) % ROTATIONS.len()])
        .collect();
    let next = ROTATIONS[(start + 3) % ROTATIONS.len()];
    let text = format!(
        "The shape turns a quarter clockwise each step: {}. What comes next?",
        shown.join(", ")
    );
    QuestionBody::sampled(rng, text, &ROTATIONS, next)
}

pub(super) fn deductive_logic<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 2] = [
        Template {
            prompt: "Premise: If it rains, the ground is wet. Ground is wet. Conclusion?",
            options: [
                "It is raining",
                "It might be raining",
                "Cannot determine",
                "It is not raining",
            ],
            answer: "It might be raining",
        },
        Template {
            prompt: "All bloops are razzies. All razzies are lazzies. Are all bloops lazzies?",
            options: ["Yes", "No", "Only some", "Cannot determine"],
            answer: "Yes",
        },
    ];
    canned(rng, "", &TEMPLATES)
}

pub(super) fn verbal_reasoning<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 2] = [
        Template {
            prompt: "Which word doesn't belong: Apple, Orange, Banana, Carrot?",
            options: ["Apple", "Orange", "Banana", "Carrot"],
            answer: "Carrot",
        },
        Template {
            prompt: "Which word doesn't belong: Piano, Guitar, Violin, Hammer?",
            options: ["Piano", "Guitar", "Violin", "Hammer"],
            answer: "Hammer",
        },
    ];
    canned(rng, "", &TEMPLATES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rotation_sequence_answer_is_next_quarter_turn() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..40 {
            let body = rotation_sequence(&mut rng);
            let mut all = ROTATIONS.to_vec();
            all.sort();
            let mut options: Vec<&str> = body.options.iter().map(String::as_str).collect();
            options.sort();
            assert_eq!(options, all);

            let last_shown = body
                .text
                .split(": ")
                .nth(1)
                .and_then(|run| run.strip_suffix(". What comes next?"))
                .and_then(|run| run.split(", ").last())
                .unwrap();
            let idx = ROTATIONS.iter().position(|r| *r == last_shown).unwrap();
            assert_eq!(body.correct_answer, ROTATIONS[(idx + 1) % ROTATIONS.len()]);
        }
    }

    #[test]
    fn spatial_reasoning_mixes_both_templates() {
        let mut rng = StdRng::seed_from_u64(17);
        let bodies: Vec<_> = (0..40).map(|_| spatial_reasoning(&mut rng)).collect();
        assert!(bodies.iter().any(|b| b.correct_answer == "Right face"));
        assert!(bodies.iter().any(|b| b.correct_answer.ends_with('°')));
    }
}
