use crate::calculator::grade::Grade;
use crate::calculator::types::{
    Identity, MAX_MARKS_PER_SUBJECT, MarksInput, ResultRecord, SUBJECTS_COUNT, SubjectMarks,
};

/// Restricts a raw mark to `[0, MAX_MARKS_PER_SUBJECT]`.
///
/// Non-finite values (NaN, ±inf) count as 0 before clamping.
pub fn clamp_score(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    // `+ 0.0` normalizes -0.0
    v.clamp(0.0, MAX_MARKS_PER_SUBJECT as f64) + 0.0
}

/// Computes total, percentage and grade for one student.
///
/// Never fails: every mark is clamped first, so the result for out-of-range
/// input equals the result for the clamped input.
pub fn compute(identity: &Identity, scores: &SubjectMarks) -> ResultRecord {
    let clamped = scores.map(clamp_score);
    let total: f64 = clamped.to_array().iter().sum();
    let percentage = total / SUBJECTS_COUNT as f64;

    ResultRecord {
        name: identity.name.clone(),
        roll_number: identity.roll_number.clone(),
        total,
        percentage,
        grade: Grade::from_percentage(percentage),
        subjects_count: SUBJECTS_COUNT,
        max_marks_per_subject: MAX_MARKS_PER_SUBJECT,
        subjects: Some(clamped),
    }
}

impl MarksInput {
    pub fn compute(&self) -> ResultRecord {
        compute(&self.identity, &self.scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(scores: [f64; 5]) -> ResultRecord {
        compute(
            &Identity::new("Alex Johnson", "23CS1005"),
            &SubjectMarks::from_array(scores),
        )
    }

    #[test]
    fn test_all_full_marks() {
        let r = run([100.0; 5]);
        assert_eq!(r.total, 500.0);
        assert_eq!(r.percentage, 100.0);
        assert_eq!(r.grade, Grade::APlus);
    }

    #[test]
    fn test_all_forty_is_f() {
        let r = run([40.0; 5]);
        assert_eq!(r.total, 200.0);
        assert_eq!(r.percentage, 40.0);
        assert_eq!(r.grade, Grade::F);
    }

    #[test]
    fn test_all_sixty_is_c() {
        let r = run([60.0; 5]);
        assert_eq!(r.total, 300.0);
        assert_eq!(r.percentage, 60.0);
        assert_eq!(r.grade, Grade::C);
    }

    #[test]
    fn test_identity_and_constants_copied() {
        let r = run([90.0, 85.0, 88.0, 78.0, 92.0]);
        assert_eq!(r.name, "Alex Johnson");
        assert_eq!(r.roll_number, "23CS1005");
        assert_eq!(r.subjects_count, 5);
        assert_eq!(r.max_marks_per_subject, 100);
        assert_eq!(r.total, 433.0);
        assert_eq!(r.grade, Grade::A);
    }

    #[test]
    fn test_percentage_is_total_over_five() {
        let samples = [0.0, 0.5, 12.25, 33.3, 49.999, 50.0, 66.7, 89.999, 99.9, 100.0];
        for a in samples {
            for b in samples {
                let r = run([a, b, a, b, 71.0]);
                assert_eq!(r.total, a + b + a + b + 71.0);
                assert_eq!(r.percentage, r.total / 5.0);
                assert_eq!(r.grade, Grade::from_percentage(r.percentage));
            }
        }
    }

    #[test]
    fn test_clamp_then_compute() {
        let raw = [-20.0, 140.0, f64::NAN, f64::INFINITY, 75.0];
        let clamped = [0.0, 100.0, 0.0, 0.0, 75.0];

        let a = run(raw);
        let b = run(clamped);
        assert_eq!(a.total, b.total);
        assert_eq!(a.percentage, b.percentage);
        assert_eq!(a.grade, b.grade);
        assert_eq!(a.subjects, Some(SubjectMarks::from_array(clamped)));
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-1.0), 0.0);
        assert_eq!(clamp_score(101.0), 100.0);
        assert_eq!(clamp_score(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert!(clamp_score(-0.0).is_sign_positive());
    }

    #[test]
    fn test_idempotent() {
        let input = MarksInput {
            identity: Identity::new("A", "1"),
            scores: SubjectMarks::from_array([55.0, 61.0, 70.5, 12.0, 99.0]),
        };
        assert_eq!(input.compute(), input.compute());
    }

    #[test]
    fn test_boundary_totals() {
        // 450 / 5 == 90 exactly
        assert_eq!(run([90.0; 5]).grade, Grade::APlus);
        assert_eq!(run([90.0, 90.0, 90.0, 90.0, 89.995]).grade, Grade::A);
        assert_eq!(run([50.0; 5]).grade, Grade::D);
        assert_eq!(run([50.0, 50.0, 50.0, 50.0, 49.995]).grade, Grade::F);
    }
}
