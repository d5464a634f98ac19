//! Static source texts used across harnesses.
//!
//! All sources are written in the hand-authored vocabulary (`"test type"`,
//! `"sub-order"`, `"student No."`, `"备注"`), i.e. before normalization.

/// One `test 1` record, the smallest useful input.
pub const SOURCE_SINGLE: &str = r#"[{"test type":"test 1","order":"1","condition":"A","word":"x","meaning":"y","sentence":"z","theme":"t","sub-order":"1","备注":"n"}]"#;

/// A realistic slice of the word list: every bucket, a dropped `test 5`
/// record, a student number column and Chinese meanings.
pub const SOURCE_MIXED: &str = r#"[
  {"test type":"test 1","student No.":"1","order":"1","condition":"massed","word":"narage","meaning":"壁画","sentence":"A group of volunteers painted a beautiful (narage) for a school playground.","theme":"art","sub-order":"1","备注":""},
  {"test type":"test 2","student No.":"1","order":"1","condition":"spaced","word":"creptor","meaning":"商人","sentence":"The (creptor) sold silk at the market.","theme":"trade","sub-order":"1","备注":"first"},
  {"test type":"test 1","student No.":"1","order":"2","condition":"massed","word":"narage","meaning":"壁画","sentence":"The room had walls covered with a (narage).","theme":"art","sub-order":"2","备注":""},
  {"test type":"test 5","student No.":"1","order":"1","condition":"massed","word":"blinket","meaning":"毯子","sentence":"She wrapped the (blinket) around her.","theme":"home","sub-order":"1","备注":""},
  {"test type":"test 3","student No.":"2","order":"1","condition":"spaced","word":"luminar","meaning":"灯笼","sentence":"A red (luminar) hung by the door.","theme":"festival","sub-order":"1","备注":"check"},
  {"test type":"test 4","student No.":"2","order":"1","condition":"massed","word":"crovine","meaning":"皇冠","sentence":"The queen lifted the (crovine).","theme":"royalty","sub-order":"1","备注":""},
  {"test type":"test 2","student No.":"2","order":"2","condition":"spaced","word":"creptor","meaning":"商人","sentence":"Every (creptor) in town knew her.","theme":"trade","sub-order":"2","备注":""}
]
"#;

/// Records in [`SOURCE_MIXED`].
pub const SOURCE_MIXED_TOTAL: usize = 7;
