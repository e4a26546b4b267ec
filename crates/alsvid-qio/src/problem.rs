//! Cost-function types and the solver input-data format.

use serde::{Deserialize, Serialize};

use crate::error::QioResult;

/// Input-data format version understood by the solver targets.
pub const COST_FUNCTION_VERSION: &str = "1.1";

/// Cost-function flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemType {
    /// Spin variables in {-1, +1}.
    Ising,
    /// Binary variables in {0, 1}.
    Pubo,
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemType::Ising => write!(f, "ising"),
            ProblemType::Pubo => write!(f, "pubo"),
        }
    }
}

/// One cost-function term: a coefficient times a product of variables.
///
/// An empty `ids` list is a constant offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Coefficient.
    pub c: f64,
    /// Indices of the variables in the product.
    pub ids: Vec<usize>,
}

impl Term {
    /// Create a new term.
    pub fn new(c: f64, ids: Vec<usize>) -> Self {
        Self { c, ids }
    }

    /// Create a constant term.
    pub fn constant(c: f64) -> Self {
        Self { c, ids: Vec::new() }
    }
}

/// An optimization problem assembled term by term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Name the problem is stored and reported under.
    pub name: String,
    /// Cost-function flavor.
    pub problem_type: ProblemType,
    /// Cost-function terms.
    pub terms: Vec<Term>,
}

impl Problem {
    /// Create an empty problem.
    pub fn new(name: impl Into<String>, problem_type: ProblemType) -> Self {
        Self {
            name: name.into(),
            problem_type,
            terms: Vec::new(),
        }
    }

    /// Append one term.
    pub fn add_term(&mut self, c: f64, ids: Vec<usize>) {
        self.terms.push(Term::new(c, ids));
    }

    /// Append a batch of terms.
    pub fn add_terms(&mut self, terms: Vec<Term>) {
        self.terms.extend(terms);
    }

    /// Number of terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Render the input-data document uploaded to the solver service.
    pub fn to_input_data(&self) -> QioResult<String> {
        let payload = InputData {
            metadata: InputMetadata { name: &self.name },
            cost_function: CostFunction {
                kind: self.problem_type,
                version: COST_FUNCTION_VERSION,
                terms: &self.terms,
            },
        };
        Ok(serde_json::to_string(&payload)?)
    }
}

#[derive(Serialize)]
struct InputData<'a> {
    metadata: InputMetadata<'a>,
    cost_function: CostFunction<'a>,
}

#[derive(Serialize)]
struct InputMetadata<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct CostFunction<'a> {
    #[serde(rename = "type")]
    kind: ProblemType,
    version: &'a str,
    terms: &'a [Term],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_data_format() {
        let mut problem = Problem::new("sample", ProblemType::Ising);
        problem.add_terms(vec![
            Term::constant(-4.5),
            Term::new(-9.0, vec![0]),
            Term::new(-3.0, vec![1, 0]),
        ]);

        let data = problem.to_input_data().unwrap();
        let value: serde_json::Value = serde_json::from_str(&data).unwrap();

        assert_eq!(value["metadata"]["name"], "sample");
        assert_eq!(value["cost_function"]["type"], "ising");
        assert_eq!(value["cost_function"]["version"], COST_FUNCTION_VERSION);
        let terms = value["cost_function"]["terms"].as_array().unwrap();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0]["c"], -4.5);
        assert_eq!(terms[0]["ids"].as_array().unwrap().len(), 0);
        assert_eq!(terms[2]["ids"], serde_json::json!([1, 0]));
    }

    #[test]
    fn test_pubo_type_string() {
        let problem = Problem::new("p", ProblemType::Pubo);
        let data = problem.to_input_data().unwrap();
        let value: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(value["cost_function"]["type"], "pubo");
        assert_eq!(ProblemType::Pubo.to_string(), "pubo");
    }

    #[test]
    fn test_add_term() {
        let mut problem = Problem::new("p", ProblemType::Ising);
        assert_eq!(problem.num_terms(), 0);
        problem.add_term(1.5, vec![0, 2]);
        assert_eq!(problem.num_terms(), 1);
        assert_eq!(problem.terms[0], Term::new(1.5, vec![0, 2]));
    }
}
