use csistyle::cmd::{Effect, ResetStyle, SetForeground8};
use csistyle::fuse_sgr;

fn main() {
    println!(
        "\n    {}╭───────────╮\n    │ Styled!!! │\n    ╰───────────╯{}\n",
        fuse_sgr!(Effect::Bold, SetForeground8::<202>),
        ResetStyle
    );
}
