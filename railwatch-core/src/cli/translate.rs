use crate::cli::TranslateArgs;
use crate::translate::Translator;

pub fn translate(args: TranslateArgs) -> anyhow::Result<()> {
    println!("{}", render(Translator::canonical(), &args));
    Ok(())
}

/// The English form of whichever phrase was given.
pub fn render(translator: &Translator, args: &TranslateArgs) -> String {
    if let Some(line) = &args.line {
        translator.line(line)
    } else if let Some(status) = &args.status {
        let en = translator.status(status);
        if translator.is_severe(status) {
            format!("{en} (severe)")
        } else {
            en
        }
    } else if let Some(reason) = &args.reason {
        translator.reason(reason)
    } else {
        String::new()
    }
}
