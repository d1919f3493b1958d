//! NBT Format Reference
//!
//! This module documents the binary and text formats as implemented by this
//! library.
//!
//! # Tag Kinds
//!
//! | Id | Name             | Payload                                   | SNBT             |
//! |----|------------------|-------------------------------------------|------------------|
//! | 0  | `TAG_End`        | none                                      | `END` (write only) |
//! | 1  | `TAG_Byte`       | `i8`                                      | `5b`             |
//! | 2  | `TAG_Short`      | `i16`                                     | `5s`             |
//! | 3  | `TAG_Int`        | `i32`                                     | `5`              |
//! | 4  | `TAG_Long`       | `i64`                                     | `5L`             |
//! | 5  | `TAG_Float`      | `f32`                                     | `5.0f`           |
//! | 6  | `TAG_Double`     | `f64`                                     | `5.0d`, `5.0`    |
//! | 7  | `TAG_Byte_Array` | `i32` length, then bytes                  | `[B;1B,2B]`      |
//! | 8  | `TAG_String`     | `u16` byte length, then modified UTF-8    | `"text"`         |
//! | 9  | `TAG_List`       | element id, `i32` length, then payloads   | `[1,2,3]`        |
//! | 10 | `TAG_Compound`   | named entries, then an End id             | `{a:1,b:"x"}`    |
//! | 11 | `TAG_Int_Array`  | `i32` length, then `i32`s                 | `[I;1,2]`        |
//! | 12 | `TAG_Long_Array` | `i32` length, then `i64`s                 | `[L;1L,2L]`      |
//!
//! # Binary Format
//!
//! All numbers are big-endian. A document is one named compound:
//!
//! ```text
//! 0a            TAG_Compound
//! 00 05 "hello" root name
//! 08 00 04 "name" 00 05 "Steve"   entry: id, key, payload
//! 00            TAG_End closes the compound
//! ```
//!
//! A compound entry is an id byte, a key string and the payload. A list
//! writes its element id once, so every element has the same kind. An empty
//! list is always written with the End id, whatever its declared kind.
//!
//! ## Strings
//!
//! Strings use modified UTF-8: U+0000 is written as `C0 80`, and characters
//! outside the Basic Multilingual Plane are written as a surrogate pair of
//! three-byte sequences. The `u16` prefix counts encoded bytes, so a string
//! may hold at most 65535 of them.
//!
//! ## Limits
//!
//! Decoding charges an estimated in-memory footprint for every tag before it
//! is read and rejects documents whose total exceeds the configured size
//! limit. Containers nested deeper than 512 levels below the root are
//! rejected. See [`limits`](crate::limits) for the charge table.
//!
//! # SNBT
//!
//! ## Grammar
//!
//! ```text
//! value       := compound | listOrArray | literal
//! compound    := '{' (key ':' value (',' key ':' value)* ','?)? '}'
//! listOrArray := '[' (('B' | 'I' | 'L') ';')? (value (',' value)* ','?)? ']'
//! key         := quotedString | simpleToken
//! literal     := quotedString | simpleToken
//! ```
//!
//! Whitespace may appear between any two tokens. A simple token is a run of
//! `A-Z a-z 0-9 . _ + -`. Quoted strings use `"` or `'`; inside them only
//! `\\` and an escaped copy of the opening quote are allowed.
//!
//! ## Literal Types
//!
//! An unquoted token is typed by trying, in order:
//!
//! 1. a numeric suffix: `b`/`B` byte, `s`/`S` short, `l`/`L` long, `f`/`F`
//!    float, `d`/`D` double
//! 2. a double, if the token contains `.`
//! 3. an int
//! 4. `true` or `false` in any case, as a byte
//! 5. a string holding the token text
//!
//! A step whose parse fails falls through to the next, so `300b` is the
//! string `"300b"`. Quoted tokens are always strings.
//!
//! ## Lists and Arrays
//!
//! A list takes its element kind from its first element and rejects any
//! element of another kind. No coercion happens: `[1,2L]` is an error. `[]` is
//! an empty list of kind End. A `B;`, `I;` or `L;` prefix makes a typed array,
//! but only when unquoted: `["B";1b]` is a list whose first element is the
//! string `"B"`, and the `;` after it is a syntax error.
//!
//! ## Output
//!
//! ```text
//! {name:"Steve",pos:[0.5d,64.0d],tags:[I;1,2]}
//! ```
//!
//! Pretty output puts each entry on its own line with one tab of indentation
//! per level and a space after each colon:
//!
//! ```text
//! {
//!     name: "Steve",
//!     pos: [
//!         0.5d,
//!         64.0d
//!     ]
//! }
//! ```
//!
//! (Tabs are shown as spaces above.)
//!
//! Keys made only of simple-token characters are written bare. Strings
//! prefer double quotes and switch to single quotes when that avoids
//! escaping.

// This module contains only documentation; no implementation code
