/// MOVES avgSpeedBinID for a speed in mph. bin 1 is below 2.5 mph, bins 2-15
/// are 5 mph wide starting at 2.5 mph, and bin 16 is 72.5 mph and above.
/// non-finite speeds fall into bin 1.
pub fn avg_speed_bin_id(mph: f64) -> i64 {
    if mph.is_nan() || mph < 2.5 {
        return 1;
    }
    let bin = ((mph - 2.5) / 5.0).floor() + 2.0;
    (bin as i64).min(16)
}

#[cfg(test)]
mod test {
    use super::avg_speed_bin_id;

    #[test]
    fn test_bin_edges() {
        assert_eq!(avg_speed_bin_id(2.4), 1);
        assert_eq!(avg_speed_bin_id(2.5), 2);
        assert_eq!(avg_speed_bin_id(7.4999), 2);
        assert_eq!(avg_speed_bin_id(7.5), 3);
        assert_eq!(avg_speed_bin_id(72.4), 15);
        assert_eq!(avg_speed_bin_id(72.5), 16);
        assert_eq!(avg_speed_bin_id(50.0), 11);
        assert_eq!(avg_speed_bin_id(0.0), 1);
        assert_eq!(avg_speed_bin_id(120.0), 16);
    }

    #[test]
    fn test_degenerate_speeds() {
        assert_eq!(avg_speed_bin_id(-3.0), 1);
        assert_eq!(avg_speed_bin_id(f64::NAN), 1);
        assert_eq!(avg_speed_bin_id(f64::INFINITY), 16);
    }
}
