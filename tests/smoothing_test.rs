/// 滑动窗口平滑测试

#[cfg(test)]
mod tests {
    use roomnav::RollingAverage;

    #[test]
    fn test_smoothing_window_eviction() {
        // 容量 3，依次加入 [10, 20, 30, 40]
        let mut avg = RollingAverage::new(3);
        for v in [10.0, 20.0, 30.0, 40.0] {
            avg.add(v);
        }

        // 窗口只反映 [20, 30, 40]
        assert_eq!(avg.count(), 3);
        assert!((avg.average() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_smoothing_partial_window() {
        let mut avg = RollingAverage::new(5);
        avg.add(-60.0);
        avg.add(-64.0);

        // 未满时按实际样本数求平均
        assert_eq!(avg.count(), 2);
        assert!((avg.average() - (-62.0)).abs() < 1e-12);
        assert_eq!(avg.capacity(), 5);
    }

    #[test]
    fn test_smoothing_running_sum_stability() {
        // 长序列下运行总和不应累积可见误差
        let mut avg = RollingAverage::new(10);
        for i in 0..1000 {
            avg.add(-70.0 + (i % 7) as f64 * 0.5);
        }
        assert_eq!(avg.count(), 10);

        let expected: f64 = (990..1000)
            .map(|i| -70.0 + (i % 7) as f64 * 0.5)
            .sum::<f64>()
            / 10.0;
        assert!((avg.average() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_smoothing_feeds_estimator() {
        use roomnav::{EstimatorConfig, RoomEstimator};

        let estimator = RoomEstimator::new(EstimatorConfig::preset_nelder_mead()).unwrap();

        // 平滑后的 RSSI 直接作为估计器输入
        let mut window = RollingAverage::new(3);
        for v in [-72.5, -73.5, -73.0] {
            window.add(v);
        }
        let result = estimator.estimate(window.average(), window.average());
        assert!(result.converged);
    }
}
