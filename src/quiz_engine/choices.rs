use rand::Rng;
use crate::quiz_engine::{
    error::QuizError,
    models::{AnswerChoices, CHOICE_COUNT, MAX_MULTIPLIER, MAX_TABLE, MIN_TABLE},
};

/// Draw the operand for the next question, uniform in `1..=12`.
pub fn draw_multiplier<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=MAX_MULTIPLIER)
}

/// Build the three answer buttons for `multiplier x table`.
///
/// Distractors come from `1..=table * 12` with the correct product removed,
/// so they scale with the table being practised. Two are drawn without
/// replacement, then all three values are shuffled into display order.
pub fn generate_choices<R: Rng>(
    rng: &mut R,
    table: u32,
    multiplier: u32,
) -> Result<AnswerChoices, QuizError> {
    if !(MIN_TABLE..=MAX_TABLE).contains(&table) {
        return Err(QuizError::InvalidTable { table });
    }
    if !(1..=MAX_MULTIPLIER).contains(&multiplier) {
        return Err(QuizError::InvalidMultiplier { multiplier });
    }

    let correct = table * multiplier;
    let mut pool: Vec<u32> = (1..=table * MAX_MULTIPLIER)
        .filter(|&v| v != correct)
        .collect();

    let needed = CHOICE_COUNT - 1;
    if pool.len() < needed {
        return Err(QuizError::ChoicePoolExhausted { table, available: pool.len() });
    }

    // Partial Fisher-Yates: only the first `needed` slots get settled.
    for i in 0..needed {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }

    let mut values = [correct, pool[0], pool[1]];
    shuffle(rng, &mut values);
    Ok(AnswerChoices::from_array(values))
}

/// Fisher-Yates shuffle in place.
fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_table_and_multiplier_yields_one_correct_and_distinct_choices() {
        let mut rng = StdRng::seed_from_u64(7);
        for table in MIN_TABLE..=MAX_TABLE {
            for multiplier in 1..=MAX_MULTIPLIER {
                for _ in 0..20 {
                    let choices = generate_choices(&mut rng, table, multiplier).unwrap();
                    let values = choices.as_array();
                    let correct = table * multiplier;

                    let hits = values.iter().filter(|&&v| v == correct).count();
                    assert_eq!(hits, 1, "table={table} multiplier={multiplier} got {choices}");
                    assert_ne!(values[0], values[1]);
                    assert_ne!(values[0], values[2]);
                    assert_ne!(values[1], values[2]);
                    for v in values {
                        assert!(
                            (1..=table * 12).contains(&v),
                            "choice {v} outside pool for table {table}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn choices_are_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_choices(&mut rng, 7, 8).unwrap()
        };
        assert_eq!(make(99), make(99));
    }

    #[test]
    fn correct_answer_lands_in_every_position() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; CHOICE_COUNT];
        for _ in 0..200 {
            let values = generate_choices(&mut rng, 3, 4).unwrap().as_array();
            let pos = values.iter().position(|&v| v == 12).unwrap();
            seen[pos] = true;
        }
        assert_eq!(seen, [true; CHOICE_COUNT]);
    }

    #[test]
    fn table_one_still_has_enough_distractors() {
        // Smallest pool: 1..=12 minus the product leaves 11 candidates.
        let mut rng = StdRng::seed_from_u64(1);
        for multiplier in 1..=MAX_MULTIPLIER {
            let choices = generate_choices(&mut rng, 1, multiplier).unwrap();
            assert!(choices.contains(multiplier));
            assert!(choices.iter().all(|v| v <= 12));
        }
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_choices(&mut rng, 0, 5),
            Err(QuizError::InvalidTable { table: 0 })
        );
        assert_eq!(
            generate_choices(&mut rng, 13, 5),
            Err(QuizError::InvalidTable { table: 13 })
        );
        assert_eq!(
            generate_choices(&mut rng, 4, 0),
            Err(QuizError::InvalidMultiplier { multiplier: 0 })
        );
        assert_eq!(
            generate_choices(&mut rng, 4, 13),
            Err(QuizError::InvalidMultiplier { multiplier: 13 })
        );
    }

    #[test]
    fn multiplier_stays_within_one_to_twelve() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 12];
        for _ in 0..1000 {
            let m = draw_multiplier(&mut rng);
            assert!((1..=12).contains(&m));
            seen[(m - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "some multipliers never drawn: {seen:?}");
    }
}
