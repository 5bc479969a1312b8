//! Python FFI bindings via PyO3.
//!
//! Exposes single-pair scoring, the match queries and the legacy synergy
//! figure. Every function takes plain four-letter codes; unknown codes raise
//! `ValueError` listing the valid ones.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! import sayu_chemistry as sc
//!
//! s = sc.chemistry("LAEF", "SRMC")
//! print(s.level, s.percentage)      # platinum 95
//! for m in sc.best_matches("LAEF"):
//!     print(m.partner, m.total)
//! print(sc.function_stack("LAEF"))  # ['Le', 'Ai', 'Ee', 'Ci']
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::chemistry::{score_pair, ChemistryScore as RustChemistryScore};
use crate::error::ChemistryError;
use crate::query::{self, MatchList, DEFAULT_CHALLENGING, DEFAULT_MATCHES};
use crate::synergy;
use crate::types::PersonalityType;

fn to_py_err(e: ChemistryError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse(code: &str) -> PyResult<PersonalityType> {
    PersonalityType::from_code(code).map_err(to_py_err)
}

// ── ChemistryScore ────────────────────────────────────────────────────────────

/// Chemistry between two types.
///
/// Attributes:
///     type_a, type_b: the two codes, as requested
///     total:          chemistry total
///     level:          "platinum", "gold", "silver" or "bronze"
///     percentage:     normalised chemistry in [0, 100]
///     mirror:         True when a type was scored against itself
#[pyclass(name = "ChemistryScore")]
#[derive(Clone)]
pub struct PyChemistryScore {
    inner: RustChemistryScore,
}

#[pymethods]
impl PyChemistryScore {
    /// First code.
    #[getter]
    pub fn type_a(&self) -> &'static str {
        self.inner.type_a.as_str()
    }
    /// Second code.
    #[getter]
    pub fn type_b(&self) -> &'static str {
        self.inner.type_b.as_str()
    }
    /// Chemistry total.
    #[getter]
    pub fn total(&self) -> f32 {
        self.inner.total
    }
    /// Tier name, lowercase.
    #[getter]
    pub fn level(&self) -> &'static str {
        self.inner.level.as_str()
    }
    /// Normalised chemistry in [0, 100].
    #[getter]
    pub fn percentage(&self) -> u8 {
        self.inner.percentage
    }
    /// Whether this is a self-pair.
    #[getter]
    pub fn mirror(&self) -> bool {
        self.inner.mirror
    }

    /// The five contributions as a dict.
    pub fn breakdown(&self) -> std::collections::HashMap<&'static str, f32> {
        let b = self.inner.breakdown;
        [
            ("primary", b.primary),
            ("auxiliary", b.auxiliary),
            ("tertiary", b.tertiary),
            ("inferior", b.inferior),
            ("bonus", b.bonus),
        ]
        .into_iter()
        .collect()
    }

    /// Names of the axes on which the pair differs.
    pub fn differing_axes(&self) -> Vec<&'static str> {
        self.inner.differing.iter().map(|a| a.name()).collect()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "ChemistryScore({}-{}, total={:.2}, level={}, percentage={})",
            self.inner.type_a,
            self.inner.type_b,
            self.inner.total,
            self.inner.level,
            self.inner.percentage,
        )
    }
}

// ── Match ─────────────────────────────────────────────────────────────────────

/// A ranked partner with its chemistry.
#[pyclass(name = "Match")]
#[derive(Clone)]
pub struct PyMatch {
    partner: PersonalityType,
    score: RustChemistryScore,
}

#[pymethods]
impl PyMatch {
    /// Partner code.
    #[getter]
    pub fn partner(&self) -> &'static str {
        self.partner.as_str()
    }
    /// Chemistry total with the partner.
    #[getter]
    pub fn total(&self) -> f32 {
        self.score.total
    }
    /// Full score with the partner.
    #[getter]
    pub fn score(&self) -> PyChemistryScore {
        PyChemistryScore { inner: self.score }
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("Match({}, total={:.2})", self.partner, self.score.total)
    }
}

fn to_py_matches(list: MatchList) -> Vec<PyMatch> {
    list.into_iter()
        .map(|m| PyMatch {
            partner: m.partner,
            score: m.score,
        })
        .collect()
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Chemistry of `type_a` with `type_b`.
#[pyfunction]
pub fn chemistry(type_a: &str, type_b: &str) -> PyResult<PyChemistryScore> {
    let inner = score_pair(parse(type_a)?, parse(type_b)?).map_err(to_py_err)?;
    Ok(PyChemistryScore { inner })
}

/// The `n` best partners of `code`, highest total first.
#[pyfunction]
#[pyo3(signature = (code, n=DEFAULT_MATCHES))]
pub fn best_matches(code: &str, n: usize) -> PyResult<Vec<PyMatch>> {
    Ok(to_py_matches(query::best_matches(parse(code)?, n)))
}

/// The `n` worst partners of `code`, lowest total first.
#[pyfunction]
#[pyo3(signature = (code, n=DEFAULT_MATCHES))]
pub fn worst_matches(code: &str, n: usize) -> PyResult<Vec<PyMatch>> {
    Ok(to_py_matches(query::worst_matches(parse(code)?, n)))
}

/// Up to `n` growth-zone partners of `code` (percentage 50 to 70).
#[pyfunction]
#[pyo3(signature = (code, n=DEFAULT_CHALLENGING))]
pub fn challenging_matches(code: &str, n: usize) -> PyResult<Vec<PyMatch>> {
    Ok(to_py_matches(query::challenging_matches(parse(code)?, n)))
}

/// Every partner of `code` mapped to its chemistry.
#[pyfunction]
pub fn all_chemistries(code: &str) -> PyResult<std::collections::HashMap<&'static str, PyChemistryScore>> {
    let map = query::all_chemistries_for(parse(code)?);
    Ok(map
        .iter()
        .map(|(t, s)| (t.as_str(), PyChemistryScore { inner: *s }))
        .collect())
}

/// The four functions of `code`, primary first.
#[pyfunction]
pub fn function_stack(code: &str) -> PyResult<Vec<&'static str>> {
    let stack = parse(code)?.function_stack();
    Ok(stack.slots().iter().map(|f| f.as_str()).collect())
}

/// Legacy axis-synergy percentage of `type_a` with `type_b`.
#[pyfunction]
pub fn synergy_score(type_a: &str, type_b: &str) -> PyResult<u8> {
    Ok(synergy::synergy_score(parse(type_a)?, parse(type_b)?))
}

// ── Module entry point ────────────────────────────────────────────────────────

/// SAYU compatibility chemistry Python bindings.
#[pymodule]
pub fn sayu_chemistry(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyChemistryScore>()?;
    m.add_class::<PyMatch>()?;
    m.add_function(wrap_pyfunction!(chemistry, m)?)?;
    m.add_function(wrap_pyfunction!(best_matches, m)?)?;
    m.add_function(wrap_pyfunction!(worst_matches, m)?)?;
    m.add_function(wrap_pyfunction!(challenging_matches, m)?)?;
    m.add_function(wrap_pyfunction!(all_chemistries, m)?)?;
    m.add_function(wrap_pyfunction!(function_stack, m)?)?;
    m.add_function(wrap_pyfunction!(synergy_score, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("TYPE_COUNT", PersonalityType::COUNT)?;
    Ok(())
}
