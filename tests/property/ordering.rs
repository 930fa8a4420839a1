//! Property-based tests for ordering guarantees

use genjoin::{generator, BoxError, ConcurrentExecutor, Executor, SerialExecutor, SharedGenerator};
use proptest::prelude::*;
use std::time::Duration;

fn task_list(outputs: &[(String, u8)]) -> Vec<SharedGenerator> {
    outputs
        .iter()
        .cloned()
        .map(|(output, delay)| {
            generator(move || {
                std::thread::sleep(Duration::from_millis(u64::from(delay % 4)));
                Ok::<_, BoxError>(output.clone())
            })
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Both executors produce the submission-order concatenation
    #[test]
    fn prop_executors_concatenate_in_submission_order(
        outputs in prop::collection::vec(("[a-z]{0,3}", any::<u8>()), 0..12),
        cap in 1usize..6,
    ) {
        let gens = task_list(&outputs);
        let expected: String = outputs.iter().map(|(s, _)| s.as_str()).collect();

        let serial = SerialExecutor::new().execute(&gens).unwrap();
        let concurrent = ConcurrentExecutor::with_max_concurrency(cap).execute(&gens).unwrap();

        prop_assert_eq!(&serial, &expected);
        prop_assert_eq!(&concurrent, &expected);
    }
}
