// src/automaton/ruleset.rs

use super::AutomatonSpec;
use crate::core::{Gate, Pauli};
use std::fmt;

/// The image of one Pauli symbol after a single time step.
///
/// `gates[k]` lands at offset `k - origin` from the originating site. The
/// origin is signed because an image need not cover its own site (a shift
/// automaton moves `X` one site to the right, giving `[X]` with origin `-1`).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    gates: Vec<Gate>,
    origin: i64,
}

impl Rule {
    /// The rule of an operator that stays put: `[I]` at origin 0.
    pub fn fixed_point() -> Self {
        Self { gates: vec![Gate::identity()], origin: 0 }
    }

    /// The output gates, leftmost first.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Index into [`Rule::gates`] aligned with the originating site.
    pub fn origin(&self) -> i64 {
        self.origin
    }

    /// Number of output gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Rules always hold at least one gate.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Relative offset of the output gate at index `k`.
    pub fn offset_of(&self, k: usize) -> i64 {
        k as i64 - self.origin
    }

    /// How many sites to the left of the originating site this rule writes.
    pub fn left_reach(&self) -> usize {
        self.origin.max(0) as usize
    }

    /// How many sites to the right of the originating site this rule writes.
    pub fn right_reach(&self) -> usize {
        (self.gates.len() as i64 - self.origin - 1).max(0) as usize
    }

    /// Symbols of the output gates, without their coefficients.
    pub fn symbols(&self) -> Vec<Pauli> {
        self.gates.iter().map(Gate::pauli).collect()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for g in &self.gates {
            write!(f, "{}", g.pauli())?;
        }
        write!(f, "]@{}", self.origin)
    }
}

/// Identity-initialized gates over the offsets `[min, max]`, stamped with
/// overlays at absolute offsets.
struct Canvas {
    min: i64,
    gates: Vec<Gate>,
}

impl Canvas {
    fn new(min: i64, max: i64) -> Self {
        let width = (max - min + 1) as usize;
        Self { min, gates: vec![Gate::identity(); width] }
    }

    fn stamp(&mut self, offset: i64, gate: &Gate) {
        let slot = &mut self.gates[(offset - self.min) as usize];
        *slot = slot.combine(gate);
    }

    fn into_rule(self) -> Rule {
        Rule { gates: self.gates, origin: -self.min }
    }
}

/// Combined `[min, max]` of two ascending offset lists, `None` when both are empty.
fn span_of(a: &[i64], b: &[i64]) -> Option<(i64, i64)> {
    let min = match (a.first(), b.first()) {
        (Some(&x), Some(&y)) => x.min(y),
        (Some(&x), None) | (None, Some(&x)) => x,
        (None, None) => return None,
    };
    let max = match (a.last(), b.last()) {
        (Some(&x), Some(&y)) => x.max(y),
        (Some(&x), None) | (None, Some(&x)) => x,
        (None, None) => return None,
    };
    Some((min, max))
}

/// Builds the image of a single operator from its `X`- and `Z`-type support.
fn image_rule(to_x: &[i64], to_z: &[i64]) -> Option<Rule> {
    let (min, max) = span_of(to_x, to_z)?;
    let mut canvas = Canvas::new(min, max);
    for &offset in to_x {
        canvas.stamp(offset, &Gate::new(Pauli::X));
    }
    for &offset in to_z {
        canvas.stamp(offset, &Gate::new(Pauli::Z));
    }
    Some(canvas.into_rule())
}

/// Overlays two rules in the common frame of their originating site.
///
/// The wider rule is laid down first and the narrower one combined on top.
/// The canvas spans the union of both supports, so this also covers rules
/// that do not nest inside one another.
fn overlay_rules(x_rule: &Rule, z_rule: &Rule) -> Rule {
    let (short, long) = if x_rule.len() <= z_rule.len() { (x_rule, z_rule) } else { (z_rule, x_rule) };

    let min = (-short.origin).min(-long.origin);
    let max = short.offset_of(short.len() - 1).max(long.offset_of(long.len() - 1));
    let mut canvas = Canvas::new(min, max);
    for rule in [long, short] {
        for (k, gate) in rule.gates.iter().enumerate() {
            canvas.stamp(rule.offset_of(k), gate);
        }
    }
    canvas.into_rule()
}

/// The local update rule of every Pauli symbol, derived from an
/// [`AutomatonSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    /// Indexed by [`Pauli::index`].
    rules: [Rule; 4],
}

impl Ruleset {
    /// Derives the ruleset of `spec`.
    ///
    /// The `X` and `Z` images come straight from the offset lists. The `Y`
    /// image is the overlay of the `X` and `Z` images in one frame, since `Y`
    /// is a phased product of `X` and `Z` and the update is linear. The
    /// identity never spreads.
    pub fn derive(spec: &AutomatonSpec) -> Self {
        let x_image = image_rule(spec.xtox(), spec.xtoz());
        let z_image = image_rule(spec.ztox(), spec.ztoz());

        let y_rule = match (&x_image, &z_image) {
            (Some(x), Some(z)) => overlay_rules(x, z),
            (Some(only), None) | (None, Some(only)) => only.clone(),
            (None, None) => Rule::fixed_point(),
        };
        let x_rule = x_image.unwrap_or_else(Rule::fixed_point);
        let z_rule = z_image.unwrap_or_else(Rule::fixed_point);

        Self { rules: [Rule::fixed_point(), x_rule, y_rule, z_rule] }
    }

    /// The rule applied to a site holding `pauli`.
    pub fn rule(&self, pauli: Pauli) -> &Rule {
        &self.rules[pauli.index()]
    }

    /// Widest left reach over all four rules.
    pub fn max_left_reach(&self) -> usize {
        self.rules.iter().map(Rule::left_reach).max().unwrap_or(0)
    }

    /// Widest right reach over all four rules.
    pub fn max_right_reach(&self) -> usize {
        self.rules.iter().map(Rule::right_reach).max().unwrap_or(0)
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pauli) in Pauli::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}->{}", pauli, self.rule(*pauli))?;
        }
        Ok(())
    }
}
