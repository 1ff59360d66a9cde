#[cfg(test)]
mod skew_profile_tests {
    use gcskew::skew::delta::delta;
    use gcskew::skew::profile::*;

    #[test]
    fn delta_values() {
        assert_eq!(delta(b'G'), 1);
        assert_eq!(delta(b'g'), 1);
        assert_eq!(delta(b'C'), -1);
        assert_eq!(delta(b'c'), -1);
        for &b in b"ATNatn7;!" {
            assert_eq!(delta(b), 0);
        }
    }

    #[test]
    fn single_base_profiles() {
        assert_eq!(compute_skew(b"G"), vec![0, 1]);
        assert_eq!(compute_skew(b"C"), vec![0, -1]);
        assert_eq!(compute_skew(b"A"), vec![0, 0]);
    }

    #[test]
    fn cagc_minima() -> anyhow::Result<()> {
        let skew = compute_skew(b"CAGC");
        assert_eq!(skew, vec![0, -1, -1, 0, -1]);
        assert_eq!(min_positions(&skew)?, vec![1, 2, 4]);
        Ok(())
    }

    #[test]
    fn prefix_sum_recurrence_holds() {
        let seq = b"CAGTCGCGGATCGATCGTACGCGTACGTGCnnxgc";
        let skew = compute_skew(seq);
        assert_eq!(skew.len(), seq.len() + 1);
        assert_eq!(skew[0], 0);
        for i in 1..skew.len() {
            assert_eq!(skew[i], skew[i - 1] + delta(seq[i - 1]));
        }
    }

    #[test]
    fn case_does_not_matter() {
        assert_eq!(compute_skew(b"cagcGGtA"), compute_skew(b"CAGCggTa"));
    }

    #[test]
    fn repeated_calls_agree() {
        let seq = b"GGCATCCG";
        assert_eq!(compute_skew(seq), compute_skew(seq));
    }

    #[test]
    fn empty_sequence_minimum_is_origin() -> anyhow::Result<()> {
        let skew = compute_skew(b"");
        assert_eq!(skew, vec![0]);
        assert_eq!(min_positions(&skew)?, vec![0]);
        assert_eq!(max_positions(&skew)?, vec![0]);
        Ok(())
    }

    #[test]
    fn minima_are_ascending_and_in_range() -> anyhow::Result<()> {
        let skew = compute_skew(b"CCGGCCGGCC");
        let mins = min_positions(&skew)?;
        assert!(!mins.is_empty());
        assert!(mins.windows(2).all(|w| w[0] < w[1]));
        assert!(mins.iter().all(|&i| i < skew.len()));
        let m = *skew.iter().min().unwrap();
        assert!(mins.iter().all(|&i| skew[i] == m));
        assert_eq!(mins.len(), skew.iter().filter(|&&v| v == m).count());
        Ok(())
    }

    #[test]
    fn summary_of_cagc() -> anyhow::Result<()> {
        let summary = SkewSummary::from_skew(&compute_skew(b"CAGC"))?;
        assert_eq!(summary.length, 4);
        assert_eq!(summary.final_skew, -1);
        assert_eq!(summary.min_skew, -1);
        assert_eq!(summary.min_positions, vec![1, 2, 4]);
        assert_eq!(summary.max_skew, 0);
        assert_eq!(summary.max_positions, vec![0, 3]);
        Ok(())
    }

    #[test]
    fn summary_of_empty_slice_is_error() {
        assert!(SkewSummary::from_skew(&[]).is_err());
    }
}
