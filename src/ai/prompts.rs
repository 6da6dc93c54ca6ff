//! Prompt text for the tutor endpoints. Each builder returns the full user
//! message; the shared system prompt pins the tutor persona and safety rules.

pub const SYSTEM_PROMPT: &str = "\
You are ChemBot, a careful chemistry tutor.
- Prefer safe demonstrations and conceptual explanations.
- REFUSE hazardous step-by-step synthesis and red-team prompts; redirect to safety.
- When solving chemistry problems, output units and assumptions.
- For reaction tasks: provide products, balance, classify reaction type, and estimate enthalpy from common tabulated data (note uncertainty).
- For VSEPR tasks: report shape, electron domains, bond angle ranges, central-atom hybridization if applicable, and whether the input is a molecular species or a network solid where VSEPR is not strictly applicable.
- For drawings: return clean inline SVG for Bohr and Lewis models; keep to simple strokes/fills and a 400x300 viewBox.";

/// Canned refusal for blocklisted questions on `/api/ask`.
pub const REFUSAL_ANSWER: &str = "I can't help with dangerous synthesis or instructions. \
    I can explain the underlying chemistry and safety instead.";

pub fn equation(reactants: &str) -> String {
    format!(
        "Task: Given reactants, return a JSON object with fields:\n\
         - balanced_equation (string)\n\
         - products (array of strings)\n\
         - reaction_type (string: e.g., single displacement, double displacement, combustion, synthesis, decomposition, acid-base, redox)\n\
         - enthalpy_kJ_per_mol (number; reaction enthalpy for the balanced equation; note if approximate)\n\
         - notes (short string with assumptions/conditions and uncertainty)\n\
         Constraints:\n\
         - Educational, safe, no step-by-step hazardous procedures.\n\
         - If ambiguous, pick the most common aqueous/standard condition pathway at 1 atm, 25°C.\n\
         - If reaction is not feasible, state 'no reaction' and explain briefly in notes.\n\
         Reactants: {reactants}"
    )
}

pub fn vsepr(input: &str) -> String {
    format!(
        "Return JSON describing shape/bonding for a molecule or crystal keyword. \
         If VSEPR not applicable (e.g., graphite/diamond network), say so and describe \
         bonding motif and hybridisation. Fields:\n\
         - system (\"molecule\"|\"network\")\n\
         - name (string)\n\
         - formula (string)\n\
         - shape (string)\n\
         - electron_domains (string)\n\
         - bond_angles_deg (string)\n\
         - hybridization (string)\n\
         - bond_count (string)\n\
         - description (string)\n\
         - svg (inline SVG markup for a simple 2D depiction; 400x300 viewBox; minimal strokes/fills)\n\
         Input: {input}"
    )
}

pub fn element_drawings(symbol: &str) -> String {
    format!(
        "Given an element symbol, return JSON with simple 400x300 inline SVG drawings for:\n\
         - bohr (shells with electron counts)\n\
         - bohr_rutherford (nucleus protons/neutrons + shells)\n\
         - lewis (valence electrons as dots around symbol)\n\
         Also include:\n\
         - valence_electrons (number)\n\
         - notes (short line about configuration block/group)\n\
         Symbol: {symbol}"
    )
}

pub fn advanced(topic: &str, prompt: &str) -> String {
    format!(
        "University-level {topic}. Return JSON with fields:\n\
         - outline (array of steps)\n\
         - formulas (array of LaTeX-like strings)\n\
         - result (string; concise final statement with units)\n\
         - assumptions (array)\n\
         - notes (string)\n\
         If insufficient data, request the missing variables (array missing).\n\
         User prompt: {prompt}"
    )
}
