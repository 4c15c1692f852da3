// src/render/template.rs

pub const QUEUE: &str = "@QUEUE";
pub const NUM_REDUCERS: &str = "@NUM_REDUCERS";
pub const SET_COMPRESSION_ENABLED: &str = "@SET_COMPRESSION_ENABLED";
pub const SET_COMPRESSION_CODEC: &str = "@SET_COMPRESSION_CODEC";
pub const OUTPUT_PATH: &str = "@OUTPUT_PATH";
pub const INPUT_PATH: &str = "@INPUT_PATH";

/// Pig script that merges every file matched by `@INPUT_PATH` into
/// `@OUTPUT_PATH`, one output file per reducer.
///
/// `\u0001` is left for Pig to interpret as the field delimiter.
pub const PIG_TEMPLATE: &str = r#"set mapreduce.job.queuename @QUEUE
set default_parallel @NUM_REDUCERS
@SET_COMPRESSION_ENABLED
@SET_COMPRESSION_CODEC
set pig.splitCombination false

rmf @OUTPUT_PATH
A = load '@INPUT_PATH' using PigStorage('\u0001', '-tagFile') AS (filename: chararray,line: chararray);
B = foreach (group A by filename) generate FLATTEN(A.line);
store B into '@OUTPUT_PATH';
"#;
