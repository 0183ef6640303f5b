use uom::si::{
    f64::{Length, ThermalConductivity},
    length::meter,
};

use crate::support::units::VolumetricHeatCapacity;

use super::{AssemblyError, Construction};

/// One finite-volume cell of a discretized wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Index of the layer this cell belongs to, outside first.
    pub layer: usize,

    pub conductivity: ThermalConductivity,
    pub heat_capacity: VolumetricHeatCapacity,

    /// Cell width (dx).
    pub width: Length,
}

/// A construction split into finite-volume cells.
///
/// Nodes are spread across layers in proportion to thickness, with at least
/// one node per layer, and cells within a layer share the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizedWall {
    nodes: Vec<Node>,
    layer_counts: Vec<usize>,
}

impl DiscretizedWall {
    /// Discretizes `construction` into `nodes` cells.
    ///
    /// Layer `i` with thickness `t_i` ideally gets `nodes·t_i/T` cells. Each
    /// layer first gets the whole part of its share (at least one), then the
    /// remaining cells go to the layers with the largest fractional remainder.
    /// If the one-cell minimum overshoots, cells are taken back from the most
    /// over-served layers. Ties go to the outermost layer.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::TooFewNodes`] if `nodes < 2` or `nodes` is
    /// less than the number of layers.
    pub fn new(construction: &Construction, nodes: usize) -> Result<Self, AssemblyError> {
        let layers = construction.layers();
        if nodes < 2 || nodes < layers.len() {
            return Err(AssemblyError::TooFewNodes {
                nodes,
                layers: layers.len(),
            });
        }

        let thicknesses: Vec<f64> = layers
            .iter()
            .map(|layer| layer.thickness.get().get::<meter>())
            .collect();
        let layer_counts = distribute(nodes, &thicknesses);

        let mut cells = Vec::with_capacity(nodes);
        for (index, (layer, &count)) in layers.iter().zip(&layer_counts).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let width = layer.thickness.get() / count as f64;
            let node = Node {
                layer: index,
                conductivity: layer.material.conductivity.get(),
                heat_capacity: layer.material.heat_capacity.get(),
                width,
            };
            cells.extend(std::iter::repeat_n(node, count));
        }

        Ok(Self {
            nodes: cells,
            layer_counts,
        })
    }

    /// Cells ordered from the outside face to the inside face.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a discretized wall has at least two cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of cells in each layer, outside first.
    #[must_use]
    pub fn layer_counts(&self) -> &[usize] {
        &self.layer_counts
    }
}

/// Splits `total` cells across layers in proportion to `thicknesses`.
///
/// Requires `total >= thicknesses.len()`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn distribute(total: usize, thicknesses: &[f64]) -> Vec<usize> {
    let sum: f64 = thicknesses.iter().sum();
    let ideal: Vec<f64> = thicknesses
        .iter()
        .map(|t| total as f64 * t / sum)
        .collect();

    let mut counts: Vec<usize> = ideal.iter().map(|share| (share.floor() as usize).max(1)).collect();
    let remainder = |counts: &[usize], i: usize| ideal[i] - counts[i] as f64;

    let mut assigned: usize = counts.iter().sum();
    while assigned < total {
        let i = pick(counts.len(), |a, b| {
            remainder(&counts, a).total_cmp(&remainder(&counts, b))
        });
        counts[i] += 1;
        assigned += 1;
    }
    while assigned > total {
        let i = pick(counts.len(), |a, b| {
            // Only layers with a spare cell are candidates; among them, the
            // most over-served (smallest remainder) gives one back.
            (counts[a] > 1)
                .cmp(&(counts[b] > 1))
                .then(remainder(&counts, b).total_cmp(&remainder(&counts, a)))
        });
        counts[i] -= 1;
        assigned -= 1;
    }

    counts
}

/// Index of the greatest element under `cmp`, preferring the lowest index on ties.
fn pick(len: usize, cmp: impl Fn(usize, usize) -> std::cmp::Ordering) -> usize {
    (0..len)
        .reduce(|best, i| if cmp(i, best).is_gt() { i } else { best })
        .unwrap_or_default()
}
