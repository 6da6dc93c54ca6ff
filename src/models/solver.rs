use serde::Deserialize;

// Request shapes for the AI tutor endpoints. The responses are provider JSON
// forwarded as-is (`serde_json::Value`), so only the inputs are typed.

/// Generic chemistry Q&A.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Equation builder input, e.g. `"Zn + CuSO4"`.
#[derive(Debug, Deserialize)]
pub struct EquationRequest {
    pub reactants: String,
}

/// VSEPR / bond-shape input: a molecule or crystal keyword,
/// e.g. `"NH3"` or `"C (graphite)"`.
#[derive(Debug, Deserialize)]
pub struct VseprRequest {
    pub input: String,
}

/// Element drawing input, e.g. `"Cl"`.
#[derive(Debug, Deserialize)]
pub struct ElementRequest {
    pub symbol: String,
}

/// University-level solver input.
#[derive(Debug, Deserialize)]
pub struct AdvancedRequest {
    /// "thermo" | "quantum" | "equilibrium" | "spectroscopy"
    pub topic: String,
    pub prompt: String,
}
