use serde::{Deserialize, Serialize};

/// One numbered phase goal. Field names follow the shipped `phases.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseGoal {
    #[serde(default)]
    pub sets: u8,
    #[serde(default)]
    pub set_size: u8,
    #[serde(default)]
    pub set_2: Option<u8>,
    #[serde(default)]
    pub run: Option<u8>,
    #[serde(default)]
    pub color: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalShape {
    TwoSets { size: usize },
    SetAndRun { set_size: usize, run: usize },
    Run { length: usize },
    Unsupported,
}

impl PhaseGoal {
    pub fn two_sets(size: u8) -> Self {
        Self {
            sets: 2,
            set_size: size,
            ..Self::default()
        }
    }

    pub fn set_and_run(set_size: u8, run: u8) -> Self {
        Self {
            sets: 1,
            set_size,
            run: Some(run),
            ..Self::default()
        }
    }

    pub fn run(length: u8) -> Self {
        Self {
            run: Some(length),
            ..Self::default()
        }
    }

    pub fn color(count: u8) -> Self {
        Self {
            color: Some(count),
            ..Self::default()
        }
    }

    pub fn set_pair(set_size: u8, second: u8) -> Self {
        Self {
            sets: 1,
            set_size,
            set_2: Some(second),
            ..Self::default()
        }
    }

    pub fn standard_phases() -> Vec<PhaseGoal> {
        vec![
            PhaseGoal::two_sets(3),
            PhaseGoal::set_and_run(3, 4),
            PhaseGoal::set_and_run(4, 4),
            PhaseGoal::run(7),
            PhaseGoal::run(8),
            PhaseGoal::run(9),
            PhaseGoal::two_sets(4),
            PhaseGoal::color(7),
            PhaseGoal::set_pair(5, 2),
            PhaseGoal::set_pair(5, 3),
        ]
    }

    pub fn shape(&self) -> GoalShape {
        if self.color.is_some() || self.set_2.is_some() {
            return GoalShape::Unsupported;
        }
        let set_size = self.set_size as usize;
        match (self.sets, self.run) {
            (2, None) if set_size > 0 => GoalShape::TwoSets { size: set_size },
            (1, Some(run)) if set_size > 0 && run > 0 => GoalShape::SetAndRun {
                set_size,
                run: run as usize,
            },
            (0, Some(run)) if run > 0 => GoalShape::Run {
                length: run as usize,
            },
            _ => GoalShape::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.shape() != GoalShape::Unsupported
    }

    pub fn describe(&self) -> String {
        if let Some(count) = self.color {
            return format!("{count} cards of one color");
        }
        let mut parts = Vec::new();
        if self.sets > 0 {
            let noun = if self.sets == 1 { "set" } else { "sets" };
            parts.push(format!("{} {noun} of {}", self.sets, self.set_size));
        }
        if let Some(second) = self.set_2 {
            parts.push(format!("1 set of {second}"));
        }
        if let Some(run) = self.run {
            if parts.is_empty() {
                parts.push(format!("run of {run}"));
            } else {
                parts.push(format!("1 run of {run}"));
            }
        }
        if parts.is_empty() {
            return "nothing".to_string();
        }
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_shapes() {
        let shapes: Vec<GoalShape> = PhaseGoal::standard_phases()
            .iter()
            .map(PhaseGoal::shape)
            .collect();
        assert_eq!(
            shapes,
            vec![
                GoalShape::TwoSets { size: 3 },
                GoalShape::SetAndRun { set_size: 3, run: 4 },
                GoalShape::SetAndRun { set_size: 4, run: 4 },
                GoalShape::Run { length: 7 },
                GoalShape::Run { length: 8 },
                GoalShape::Run { length: 9 },
                GoalShape::TwoSets { size: 4 },
                GoalShape::Unsupported,
                GoalShape::Unsupported,
                GoalShape::Unsupported,
            ]
        );
    }

    #[test]
    fn zero_sized_goals_are_unsupported() {
        assert_eq!(PhaseGoal::two_sets(0).shape(), GoalShape::Unsupported);
        assert_eq!(PhaseGoal::run(0).shape(), GoalShape::Unsupported);
        assert_eq!(PhaseGoal::default().shape(), GoalShape::Unsupported);
    }

    #[test]
    fn descriptions() {
        let phases = PhaseGoal::standard_phases();
        assert_eq!(phases[0].describe(), "2 sets of 3");
        assert_eq!(phases[1].describe(), "1 set of 3 + 1 run of 4");
        assert_eq!(phases[3].describe(), "run of 7");
        assert_eq!(phases[7].describe(), "7 cards of one color");
        assert_eq!(phases[8].describe(), "1 set of 5 + 1 set of 2");
    }

    #[test]
    fn parses_sparse_json() {
        let goal: PhaseGoal = serde_json::from_str(r#"{"sets": 1, "set_size": 3, "run": 4}"#)
            .expect("parse goal");
        assert_eq!(goal, PhaseGoal::set_and_run(3, 4));
        let goal: PhaseGoal = serde_json::from_str(r#"{"color": 7}"#).expect("parse goal");
        assert_eq!(goal, PhaseGoal::color(7));
    }
}
