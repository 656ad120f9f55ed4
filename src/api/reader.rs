use std::sync::Arc;

use super::{JosuError, JosuScript};

/// Reader bound to an output script, shared across host threads.
#[derive(uniffi::Object)]
pub struct JosuReader {
    script: JosuScript,
}

#[uniffi::export]
impl JosuReader {
    #[uniffi::constructor]
    fn new(script: JosuScript) -> Arc<Self> {
        Arc::new(Self { script })
    }

    fn script(&self) -> JosuScript {
        self.script
    }

    fn numeral(&self, input: String) -> Result<String, JosuError> {
        let reading = josu_core::read_numeral(input)?;
        Ok(self.script.render(reading))
    }

    fn counter(&self, counter: String, quantity: String) -> Result<String, JosuError> {
        let reading = josu_core::counter_to_kana(&counter, quantity)?;
        Ok(self.script.render(reading))
    }

    fn day(&self, day: String) -> Result<String, JosuError> {
        let reading = josu_core::read_day(day)?;
        Ok(self.script.render(reading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn katakana_reader() {
        let reader = JosuReader::new(JosuScript::Katakana);
        assert_eq!(reader.counter("本".into(), "3".into()).unwrap(), "サンボン");
        assert_eq!(reader.numeral("100".into()).unwrap(), "ヒャク");
        assert_eq!(reader.day("1".into()).unwrap(), "ツイタチ");
    }

    #[test]
    fn errors_carry_messages() {
        let reader = JosuReader::new(JosuScript::Hiragana);
        let err = reader.counter("人".into(), "2".into()).unwrap_err();
        assert!(matches!(err, JosuError::Invalid { ref msg } if msg.contains("人")));
        let err = reader.numeral("1.".into()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid numeric format");
    }
}
