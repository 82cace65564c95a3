// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each:
//
//   vocab     — make sure vocab.txt exists
//   samples   — stream raw training windows
//   generate  — the full encoded, sharded dataset
//
// Rules for this layer:
//   - No parsing or tokenizer code here
//   - No printing (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Shared configuration for every workflow
pub mod config;

// Build-if-missing vocabulary workflow
pub mod vocab_use_case;

// Raw sample streaming workflow
pub mod samples_use_case;

// Full dataset generation workflow
pub mod generate_use_case;
