use crate::models::NumerologyNumber;

/// One-line meaning of a numerology number, as shown in the guide
pub fn number_meaning(number: NumerologyNumber) -> &'static str {
    match number {
        NumerologyNumber::One => "Лидер, первопроходец, независимость",
        NumerologyNumber::Two => "Партнёрство, гармония, дипломатия",
        NumerologyNumber::Three => "Творчество, самовыражение, общительность",
        NumerologyNumber::Four => "Стабильность, практичность, надёжность",
        NumerologyNumber::Five => "Свобода, перемены, приключения",
        NumerologyNumber::Six => "Ответственность, забота, семья",
        NumerologyNumber::Seven => "Духовность, мудрость, анализ",
        NumerologyNumber::Eight => "Успех, власть, материальное благополучие",
        NumerologyNumber::Nine => "Гуманизм, идеализм, завершение циклов",
        NumerologyNumber::Eleven => "Мастер-число: интуиция, духовное просветление",
        NumerologyNumber::TwentyTwo => "Мастер-число: великий строитель",
        NumerologyNumber::ThirtyThree => "Мастер-число: учитель мастеров",
    }
}

/// Meaning of an optional indicator; empty when not computed
pub fn indicator_meaning(number: Option<NumerologyNumber>) -> &'static str {
    number.map_or("", number_meaning)
}
