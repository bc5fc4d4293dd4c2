use crate::reports;
use clap::Args;
use typestrike::dictionary::Dictionary;
use typestrike::segmenter::segment;

#[derive(Args, Debug, Clone)]
pub struct SegmentArgs {
    /// Phrases to split into typing groups.
    #[arg(required = true)]
    pub phrases: Vec<String>,
}

pub fn run(args: SegmentArgs, dictionary: &Dictionary) {
    for phrase in &args.phrases {
        let groups = segment(phrase, dictionary, dictionary.max_key_len());
        reports::print_group_table(phrase, &groups);
    }
}
