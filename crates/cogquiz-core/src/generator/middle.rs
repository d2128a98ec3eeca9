//! Generators for the 9-11 band.

use rand::Rng;

use super::{canned, QuestionBody, Template};

pub(super) fn matrix_pattern<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const INTROS: [&str; 4] = [
        "Complete the 3×3 matrix where each number increases by 1",
        "Find the missing number in the pattern matrix",
        "Matrix with alternating colors and shapes",
        "Number matrix with diagonal pattern",
    ];
    const GRID: [Template; 1] = [Template {
        prompt: "[1] [2] [3]\n[4] [5] [6]\n[7] [8] [?]",
        options: ["9", "10", "11", "12"],
        answer: "9",
    }];
    let intro = format!("{}:", INTROS[rng.random_range(0..INTROS.len())]);
    canned(rng, &intro, &GRID)
}

pub(super) fn number_series<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 4] = [
        Template {
            prompt: "2, 4, 8, 16, ?",
            options: ["24", "28", "32", "36"],
            answer: "32",
        },
        Template {
            prompt: "3, 6, 9, 12, ?",
            options: ["13", "14", "15", "16"],
            answer: "15",
        },
        Template {
            prompt: "1, 4, 9, 16, ?",
            options: ["20", "23", "25", "30"],
            answer: "25",
        },
        Template {
            prompt: "5, 10, 20, 40, ?",
            options: ["60", "70", "80", "90"],
            answer: "80",
        },
    ];
    canned(rng, "What comes next in this series?", &TEMPLATES)
}

pub(super) fn word_analogy<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 4] = [
        Template {
            prompt: "Hot : Cold :: Day : ?",
            options: ["Night", "Morning", "Evening", "Noon"],
            answer: "Night",
        },
        Template {
            prompt: "Pen : Write :: Knife : ?",
            options: ["Cut", "Sharp", "Metal", "Tool"],
            answer: "Cut",
        },
        Template {
            prompt: "Bird : Fly :: Fish : ?",
            options: ["Swim", "Water", "Scale", "Ocean"],
            answer: "Swim",
        },
        Template {
            prompt: "Doctor : Hospital :: Teacher : ?",
            options: ["School", "Class", "Student", "Book"],
            answer: "School",
        },
    ];
    canned(rng, "Complete the analogy:", &TEMPLATES)
}

pub(super) fn pattern_completion<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 4] = [
        Template {
            prompt: "AB AB AB ?",
            options: ["AB", "BA", "AA", "BB"],
            answer: "AB",
        },
        Template {
            prompt: "AABB AABB ?",
            options: ["AABB", "BBAA", "ABAB", "BABA"],
            answer: "AABB",
        },
        Template {
            prompt: "123 234 345 ?",
            options: ["456", "567", "345", "234"],
            answer: "456",
        },
        Template {
            prompt: "XXO XXO XXO ?",
            options: ["XXO", "XOX", "OXX", "OXO"],
            answer: "XXO",
        },
    ];
    canned(rng, "Complete the pattern:", &TEMPLATES)
}

pub(super) fn logical_sequence<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 4] = [
        Template {
            prompt: "Morning → Noon → Afternoon → ?",
            options: ["Evening", "Night", "Dawn", "Midnight"],
            answer: "Evening",
        },
        Template {
            prompt: "Seed → Sprout → Plant → ?",
            options: ["Flower", "Tree", "Fruit", "Leaf"],
            answer: "Flower",
        },
        Template {
            prompt: "Learn → Practice → Improve → ?",
            options: ["Master", "Forget", "Repeat", "Teach"],
            answer: "Master",
        },
        Template {
            prompt: "Question → Research → Answer → ?",
            options: ["Verify", "Ask", "Forget", "Question"],
            answer: "Verify",
        },
    ];
    canned(rng, "What comes next in this logical sequence?", &TEMPLATES)
}

pub(super) fn code_decoding<R: Rng + ?Sized>(rng: &mut R) -> QuestionBody {
    const TEMPLATES: [Template; 4] = [
        Template {
            prompt: "If A=1, B=2, C=3, then CAT = ?",
            options: ["3120", "123", "320", "312"],
            answer: "3120",
        },
        Template {
            prompt: "If DOG = 4157, then GOD = ?",
            options: ["7154", "4157", "1547", "7415"],
            answer: "7154",
        },
        Template {
            prompt: "If 123 means ABC, then 456 means ?",
            options: ["DEF", "GHI", "JKL", "MNO"],
            answer: "DEF",
        },
        Template {
            prompt: "Decode: X → A, Y → B, Z → C, then W → ?",
            options: ["D", "C", "B", "A"],
            answer: "D",
        },
    ];
    canned(rng, "Code Decoding:", &TEMPLATES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn matrix_grid_always_resolves_to_nine() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let body = matrix_pattern(&mut rng);
            assert_eq!(body.correct_answer, "9");
            assert!(body.text.ends_with("[7] [8] [?]"));
        }
    }

    #[test]
    fn canned_templates_keep_fixed_option_order() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..40 {
            let body = word_analogy(&mut rng);
            assert_eq!(body.options[0], body.correct_answer);
            assert!(body.text.starts_with("Complete the analogy:\n"));
        }
    }
}
