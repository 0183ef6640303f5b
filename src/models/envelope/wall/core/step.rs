use uom::si::{length::meter, thermal_conductivity::watt_per_meter_kelvin};

use crate::support::tridiagonal::{TridiagonalError, TridiagonalSystem};

use super::{DiscretizedWall, config::Parameters};

/// Why a single implicit step failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum StepFailure {
    /// The tridiagonal solve hit a singular pivot.
    Singular(TridiagonalError),

    /// The solve finished but produced a non-finite temperature.
    NonFinite,
}

/// Fully implicit finite-volume stepper for a wall coupled to room air.
///
/// Unknowns are the `n` node temperatures followed by the room air, all in
/// kelvin. Every coefficient is constant over the solve, so the matrix is
/// assembled once and each step only rebuilds the right-hand side.
#[derive(Debug, Clone)]
pub(super) struct Stepper {
    system: TridiagonalSystem,

    /// Capacitance per unit area over the time step, W/m²·K, one per unknown.
    capacitance: Vec<f64>,

    /// Conductance from the sol-air node to the first node center, W/m²·K.
    outside: f64,

    solution: Vec<f64>,
}

impl Stepper {
    pub(super) fn new(wall: &DiscretizedWall, params: &Parameters) -> Self {
        let nodes = wall.nodes();
        let n = nodes.len();

        // Half-cell resistance from each node center to its faces.
        let half: Vec<f64> = nodes
            .iter()
            .map(|node| {
                node.width.get::<meter>() / (2.0 * node.conductivity.get::<watt_per_meter_kelvin>())
            })
            .collect();

        let mut capacitance: Vec<f64> = nodes
            .iter()
            .map(|node| node.heat_capacity.value * node.width.get::<meter>() / params.dt)
            .collect();
        capacitance.push(params.air_heat_capacity / params.dt);

        // Conductance between neighbouring node centers.
        let interface: Vec<f64> = half.windows(2).map(|w| 1.0 / (w[0] + w[1])).collect();
        let outside = 1.0 / (1.0 / params.ho + half[0]);
        let inside = 1.0 / (1.0 / params.hi + half[n - 1]);

        let mut system = TridiagonalSystem::zeros(n + 1);
        for i in 0..=n {
            let west = match i {
                0 => outside,
                i if i == n => inside,
                i => interface[i - 1],
            };
            let east = match i {
                i if i == n => 0.0,
                i if i == n - 1 => inside,
                i => interface[i],
            };

            system.lower[i] = if i == 0 { 0.0 } else { -west };
            system.upper[i] = -east;
            system.diag[i] = capacitance[i] + west + east;
        }

        Self {
            system,
            capacitance,
            outside,
            solution: Vec::with_capacity(n + 1),
        }
    }

    /// Advances `state` (nodes then room air, kelvin) by one time step with
    /// the outside face driven by `sol_air` (kelvin).
    pub(super) fn step(&mut self, state: &mut [f64], sol_air: f64) -> Result<(), StepFailure> {
        for ((rhs, c), t) in self.system.rhs.iter_mut().zip(&self.capacitance).zip(&*state) {
            *rhs = c * t;
        }
        self.system.rhs[0] += self.outside * sol_air;

        self.system
            .solve_into(&mut self.solution)
            .map_err(StepFailure::Singular)?;

        if !self.solution.iter().all(|t| t.is_finite()) {
            return Err(StepFailure::NonFinite);
        }
        state.copy_from_slice(&self.solution);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Time, time::second};

    use super::super::{WallConfig, test_support::homogeneous};

    fn stepper(nodes: usize, dt: f64) -> (Stepper, usize) {
        let wall = DiscretizedWall::new(&homogeneous(0.1, 1.0, 1e6), nodes).unwrap();
        let config = WallConfig {
            nodes,
            time_step: Time::new::<second>(dt),
            ..WallConfig::default()
        };
        let params = Parameters::new(&config).unwrap();
        (Stepper::new(&wall, &params), wall.len())
    }

    #[test]
    fn assembles_conduction_rows() {
        let (stepper, n) = stepper(10, 60.0);
        let sys = &stepper.system;

        // dx = 0.01 m, k = 1 → K = 1 / (0.005 + 0.005) = 100.
        // C = 1e6 · 0.01 / 60.
        let c = 1e6 * 0.01 / 60.0;
        let u_o = 1.0 / (1.0 / 13.0 + 0.005);
        let u_i = 1.0 / (1.0 / 8.0 + 0.005);

        assert_relative_eq!(sys.diag[0], c + u_o + 100.0, epsilon = 1e-9);
        assert_relative_eq!(sys.upper[0], -100.0, epsilon = 1e-9);
        assert_relative_eq!(sys.diag[4], c + 200.0, epsilon = 1e-9);
        assert_relative_eq!(sys.lower[4], -100.0, epsilon = 1e-9);
        assert_relative_eq!(sys.diag[n - 1], c + 100.0 + u_i, epsilon = 1e-9);
        assert_relative_eq!(sys.upper[n - 1], -u_i, epsilon = 1e-9);
        assert_relative_eq!(sys.lower[n], -u_i, epsilon = 1e-9);
        assert_relative_eq!(
            sys.diag[n],
            1.179_766_047_025_846_9 * 1005.458_757 * 2.5 / 60.0 + u_i,
            epsilon = 1e-9
        );
        assert_relative_eq!(stepper.outside, u_o, epsilon = 1e-12);
    }

    #[test]
    fn uniform_state_at_sol_air_is_steady() {
        let (mut stepper, n) = stepper(10, 600.0);
        let mut state = vec![300.0; n + 1];

        for _ in 0..50 {
            stepper.step(&mut state, 300.0).unwrap();
        }
        for t in state {
            assert_relative_eq!(t, 300.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn heat_flows_inward_from_a_hot_face() {
        let (mut stepper, n) = stepper(10, 600.0);
        let mut state = vec![290.0; n + 1];

        stepper.step(&mut state, 320.0).unwrap();

        assert!(state[0] > 290.0);
        for pair in state.windows(2) {
            assert!(pair[0] >= pair[1], "temperatures should fall inward");
        }
        assert!(state[n] >= 290.0);
    }

    #[test]
    fn non_finite_forcing_is_caught() {
        let (mut stepper, n) = stepper(4, 60.0);
        let mut state = vec![300.0; n + 1];

        assert_eq!(
            stepper.step(&mut state, f64::NAN),
            Err(StepFailure::NonFinite)
        );
        assert!(state.iter().all(|t| (t - 300.0).abs() < f64::EPSILON));
    }
}
