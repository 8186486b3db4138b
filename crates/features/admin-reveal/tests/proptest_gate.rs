use jdash_admin_reveal::{ClickGate, ClickOutcome, Threshold};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_threshold_th_click_reveals(threshold in 1u32..=50, clicks in 0usize..400) {
        let mut gate = ClickGate::new(Threshold::new(threshold).expect("non-zero"));
        let threshold = threshold as usize;

        for click in 1..=clicks {
            let outcome = gate.click();
            let position = (click - 1) % threshold + 1;

            if position == threshold {
                prop_assert_eq!(outcome, ClickOutcome::Reveal { count: threshold as u32 });
                prop_assert_eq!(gate.count(), 0);
            } else {
                prop_assert_eq!(outcome, ClickOutcome::Proceed { count: position as u32 });
                prop_assert_eq!(gate.count() as usize, position);
            }
        }
    }

    #[test]
    fn counter_never_reaches_threshold(threshold in 1u32..=20, clicks in 0usize..200) {
        let mut gate = ClickGate::new(Threshold::new(threshold).expect("non-zero"));
        for _ in 0..clicks {
            gate.click();
            prop_assert!(gate.count() < threshold);
        }
    }
}
