#[cfg(test)]
mod test_sweep {
    use approx::assert_relative_eq;
    use menten::prelude::*;
    use pretty_assertions::assert_eq;

    /// Tests the default sweep end to end.
    ///
    /// The default grid has 10 Km values and 2 Vmax values on a substrate axis
    /// of 1000 points from 0 to 5 M. Every curve must start at zero, rise
    /// monotonically and stay below its Vmax.
    #[test]
    fn test_default_sweep() {
        // ARRANGE
        let setup = SweepSetupBuilder::default().build().unwrap();

        // ACT
        let table = setup.run().unwrap();

        // ASSERT
        assert_eq!(table.len(), 20);

        for (key, curve) in &table {
            assert_eq!(curve.len(), 1000);
            assert_relative_eq!(curve[0], 0.0);
            assert!(curve.windows(2).all(|w| w[0] <= w[1]));
            assert!(curve.iter().all(|&v| v < key.vmax()));
        }
    }

    /// Every unordered pair of curves is compared exactly once.
    #[test]
    fn test_default_sweep_report_covers_all_pairs() {
        let setup = SweepSetupBuilder::default().build().unwrap();
        let table = setup.run().unwrap();
        let substrate = setup.substrate();

        let report = compare_all(&table, &substrate, setup.intersection_start).unwrap();

        assert_eq!(report.len(), 20 * 19 / 2);
        for comparison in report.iter() {
            assert!(comparison.first < comparison.second);
        }
    }

    /// Curves with the same Vmax never cross, so they always end up in the rejects.
    #[test]
    fn test_same_vmax_pairs_do_not_intersect() {
        let setup = SweepSetupBuilder::default().build().unwrap();
        let table = setup.run().unwrap();
        let substrate = setup.substrate();

        let report = compare_all(&table, &substrate, setup.intersection_start).unwrap();

        for comparison in &report.intersecting {
            assert_ne!(comparison.first.vmax(), comparison.second.vmax());
        }
    }

    /// A low Km with a low Vmax leads early and is overtaken by a high Km
    /// with a high Vmax. The curves cross at S = (V1 Km2 - V2 Km1) / (V2 - V1).
    #[test]
    fn test_crossing_matches_analytic_solution() {
        let setup = SweepSetupBuilder::default().build().unwrap();
        let table = setup.run().unwrap();
        let substrate = setup.substrate();

        // Lowest (Km, Vmax) against highest
        let first = *table.keys().next().unwrap();
        let second = *table.keys().last().unwrap();
        let comparison = compare_pair(&table, &substrate, first, second, 100).unwrap();

        let (k1, v1) = (first.km(), first.vmax());
        let (k2, v2) = (second.km(), second.vmax());
        let expected = (v1 * k2 - v2 * k1) / (v2 - v1);
        let step = 5.0 / 999.0;

        assert_relative_eq!(expected, 3.95, epsilon = 1e-9);
        assert_eq!(comparison.dominance, Dominance::Second);
        assert!(comparison.intersects());
        assert_relative_eq!(comparison.concentration.unwrap(), expected, epsilon = step);
    }

    /// Running the same points twice yields equal tables.
    #[test]
    fn test_run_is_idempotent() {
        let points = vec![(0.0, 1.0, 2.0), (1.0, 1.0, 2.0), (2.0, 1.0, 2.0)];

        let first = run(points.clone()).unwrap();
        let second = run(points).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.curve(1.0, 2.0), Some([0.0, 1.0, 4.0 / 3.0].as_slice()));
    }

    /// The curve for a pair in a grid matches the single-pair computation.
    #[test]
    fn test_grid_matches_run_with_data() {
        let substrate = LinearAxis::new(0.0, 5.0, 50).values();
        let table = run_grid(&substrate, &[0.2, 0.8], &[1.0]).unwrap();

        let single = run_with_data(&substrate, 0.8, 1.0).unwrap();

        assert_eq!(table.curve(0.8, 1.0), Some(single.as_slice()));
    }

    #[test]
    fn test_invalid_setup_is_rejected() {
        let setup = SweepSetupBuilder::default()
            .num_substrate(0_usize)
            .build()
            .unwrap();

        assert!(matches!(setup.run(), Err(SweepError::InvalidSetup(_))));
    }

    #[test]
    fn test_invalid_km_is_rejected() {
        let result = run_grid(&[0.0, 1.0], &[0.0], &[1.0]);

        assert_eq!(
            result,
            Err(KineticsError::InvalidParameter {
                name: "Km",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_start_out_of_bounds() {
        let substrate = LinearAxis::new(0.0, 1.0, 10).values();
        let table = run_grid(&substrate, &[0.1, 1.0], &[1.0]).unwrap();

        let result = compare_all(&table, &substrate, 10);

        assert_eq!(
            result,
            Err(AnalysisError::StartOutOfBounds { start: 10, len: 10 })
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let substrate = LinearAxis::new(0.0, 5.0, 200).values();
        let table = run_grid(&substrate, &[0.1, 1.0], &[0.9, 1.1]).unwrap();
        let report = compare_all(&table, &substrate, 100).unwrap();

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["start"], 100);
        let total = json["intersecting"].as_array().unwrap().len()
            + json["rejects"].as_array().unwrap().len();
        assert_eq!(total, 6);
    }
}
