use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::AnswerOption;

/// Build the answer choices for one question: the correct text plus every
/// incorrect one, in a uniformly random order (Fisher-Yates via
/// `SliceRandom::shuffle`).
pub fn shuffled_options<R: Rng>(
    correct: String,
    incorrect: Vec<String>,
    rng: &mut R,
) -> Vec<AnswerOption> {
    let mut options: Vec<AnswerOption> = incorrect
        .into_iter()
        .map(|text| AnswerOption {
            text,
            is_correct: false,
        })
        .collect();

    options.push(AnswerOption {
        text: correct,
        is_correct: true,
    });

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn texts(options: &[AnswerOption]) -> Vec<&str> {
        options.iter().map(|o| o.text.as_str()).collect()
    }

    #[test]
    fn test_exactly_one_correct_option() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = shuffled_options(
            "right".to_string(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            &mut rng,
        );

        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
        let correct = options.iter().find(|o| o.is_correct).unwrap();
        assert_eq!(correct.text, "right");
    }

    #[test]
    fn test_all_texts_preserved() {
        let mut rng = StdRng::seed_from_u64(11);
        let options = shuffled_options(
            "w".to_string(),
            vec!["x".to_string(), "y".to_string(), "z".to_string()],
            &mut rng,
        );

        let mut got = texts(&options);
        got.sort();
        assert_eq!(got, vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn test_empty_incorrect_list_is_valid() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = shuffled_options("only".to_string(), Vec::new(), &mut rng);

        assert_eq!(options.len(), 1);
        assert!(options[0].is_correct);
    }

    #[test]
    fn test_orderings_vary_across_calls() {
        let mut rng = StdRng::seed_from_u64(42);
        let incorrect: Vec<String> = (0..7).map(|i| format!("wrong {i}")).collect();

        let first = texts(&shuffled_options(
            "right".to_string(),
            incorrect.clone(),
            &mut rng,
        ))
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

        // 8! orderings; 32 draws from the same stream virtually never all
        // collide with the first one unless shuffle is broken.
        let saw_different = (0..32).any(|_| {
            texts(&shuffled_options(
                "right".to_string(),
                incorrect.clone(),
                &mut rng,
            )) != first
        });
        assert!(saw_different);
    }
}
