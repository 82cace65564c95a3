// ============================================================
// Layer 6 — Token Encoder
// ============================================================
// Maps sensor identifiers to integer ids for the model.
//
// Id layout:
//   0        <pad>   reserved
//   1        <EOS>   reserved, appended to every sample
//   2..      one id per vocab.txt line, in file order
//
// The encoder is a word-level HuggingFace tokenizer built in
// memory from the vocabulary text: whitespace pre-tokenizer,
// no normaliser, no decoder. There is no unknown-token
// fallback — an identifier missing from the vocabulary is an
// error, so a stale vocab.txt shows up instead of silently
// producing garbage ids.
//
// Reference: tokenizers crate documentation (WordLevel model)

use serde_json::{json, Map, Value};
use tokenizers::Tokenizer;

use crate::domain::error::{DatasetError, DatasetResult};
use crate::domain::sample::{EncodedSample, Sample};

pub const PAD: &str = "<pad>";
pub const EOS: &str = "<EOS>";
pub const PAD_ID: u32 = 0;
pub const EOS_ID: u32 = 1;

/// Reserved tokens, in id order
pub const RESERVED_TOKENS: [&str; 2] = [PAD, EOS];

pub struct TokenEncoder {
    tokenizer: Tokenizer,
    vocab_size: usize,
}

impl TokenEncoder {
    /// Build an encoder from newline-separated vocabulary text.
    /// Blank lines and repeated entries are ignored.
    pub fn from_vocab_text(text: &str) -> DatasetResult<Self> {
        let mut vocab = Map::new();
        for (id, token) in RESERVED_TOKENS.iter().enumerate() {
            vocab.insert(token.to_string(), json!(id));
        }

        let mut next_id = RESERVED_TOKENS.len();
        for line in text.lines() {
            let token = line.trim();
            if token.is_empty() || vocab.contains_key(token) {
                continue;
            }
            vocab.insert(token.to_string(), json!(next_id));
            next_id += 1;
        }

        let added_tokens: Vec<Value> = RESERVED_TOKENS
            .iter()
            .enumerate()
            .map(|(id, token)| {
                json!({
                    "id": id, "content": token, "single_word": false, "lstrip": false,
                    "rstrip": false, "normalized": false, "special": true
                })
            })
            .collect();

        let tokenizer_json = json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": added_tokens,
            "normalizer": null,
            "pre_tokenizer": { "type": "WhitespaceSplit" },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": Value::Object(vocab),
                "unk_token": "<unk>"
            }
        });

        let bytes = serde_json::to_vec(&tokenizer_json)
            .map_err(|e| DatasetError::Tokenizer(e.to_string()))?;
        let tokenizer = Tokenizer::from_bytes(bytes)
            .map_err(|e| DatasetError::Tokenizer(e.to_string()))?;

        tracing::debug!("Token encoder ready with {} ids", next_id);
        Ok(Self { tokenizer, vocab_size: next_id })
    }

    /// Total number of ids, reserved tokens included
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Encode whitespace-separated tokens into ids.
    pub fn encode(&self, text: &str) -> DatasetResult<Vec<u32>> {
        if let Some(unknown) = text
            .split_whitespace()
            .find(|t| self.tokenizer.token_to_id(t).is_none())
        {
            return Err(DatasetError::UnknownToken(unknown.to_string()));
        }

        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| DatasetError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    /// Encode a sample's targets and terminate them with EOS.
    pub fn encode_sample(&self, sample: &Sample) -> DatasetResult<EncodedSample> {
        let mut ids = self.encode(&sample.targets)?;
        ids.push(EOS_ID);
        Ok(EncodedSample::new(ids))
    }

    /// Decode ids back to a space-joined string, dropping <pad> and <EOS>.
    pub fn decode(&self, ids: &[u32]) -> DatasetResult<String> {
        if let Some(&unknown) = ids.iter().find(|&&id| self.tokenizer.id_to_token(id).is_none()) {
            return Err(DatasetError::UnknownId(unknown));
        }

        self.tokenizer
            .decode(ids, true)
            .map_err(|e| DatasetError::Tokenizer(e.to_string()))
    }
}
