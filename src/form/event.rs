use crate::catalog::{Category, Unit};
use crate::form::error::FormError;
use crate::quantity::parse_value;
use std::str::FromStr;

/// A single user interaction with the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SelectCategory(Category),
    SetSource(Unit),
    SetTarget(Unit),
    SetInput(String),
    Swap,
}

impl FromStr for FormEvent {
    type Err = FormError;

    /// Text commands: `category <name>`, `from <unit>`, `to <unit>`,
    /// `value <number>`, `swap`. A bare number is shorthand for `value`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "category" | "cat" => {
                if rest.is_empty() {
                    return Err(FormError::MissingArgument("category"));
                }
                Ok(FormEvent::SelectCategory(rest.parse()?))
            }
            "from" => {
                if rest.is_empty() {
                    return Err(FormError::MissingArgument("source unit"));
                }
                Ok(FormEvent::SetSource(rest.parse()?))
            }
            "to" => {
                if rest.is_empty() {
                    return Err(FormError::MissingArgument("target unit"));
                }
                Ok(FormEvent::SetTarget(rest.parse()?))
            }
            "value" | "input" => Ok(FormEvent::SetInput(rest.to_string())),
            "swap" if rest.is_empty() => Ok(FormEvent::Swap),
            _ if parse_value(line).is_some() => Ok(FormEvent::SetInput(line.to_string())),
            _ => Err(FormError::UnknownCommand(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "category weight".parse::<FormEvent>().unwrap(),
            FormEvent::SelectCategory(Category::Weight)
        );
        assert_eq!(
            "from Cubic Foot".parse::<FormEvent>().unwrap(),
            FormEvent::SetSource(Unit::CubicFoot)
        );
        assert_eq!(
            "TO gal".parse::<FormEvent>().unwrap(),
            FormEvent::SetTarget(Unit::Gallon)
        );
        assert_eq!(
            "value 12.5".parse::<FormEvent>().unwrap(),
            FormEvent::SetInput("12.5".to_string())
        );
        assert_eq!(
            "value".parse::<FormEvent>().unwrap(),
            FormEvent::SetInput(String::new())
        );
        assert_eq!("swap".parse::<FormEvent>().unwrap(), FormEvent::Swap);
        assert_eq!(
            " 42 ".parse::<FormEvent>().unwrap(),
            FormEvent::SetInput("42".to_string())
        );
    }

    #[test]
    fn test_parse_command_errors() {
        assert_eq!(
            "from".parse::<FormEvent>(),
            Err(FormError::MissingArgument("source unit"))
        );
        assert_eq!(
            "category speed".parse::<FormEvent>(),
            Err(FormError::Catalog(CatalogError::UnknownCategory(
                "speed".to_string()
            )))
        );
        assert!(matches!(
            "jump".parse::<FormEvent>(),
            Err(FormError::UnknownCommand(cmd)) if cmd == "jump"
        ));
        assert!(matches!(
            "swap now".parse::<FormEvent>(),
            Err(FormError::UnknownCommand(_))
        ));
    }
}
