use crate::models::{Analysis, AnalysisCategory, CompatibilityScore};

static IDENTICAL: Analysis = Analysis {
    category: AnalysisCategory::Identical,
    title: "Идеальное совпадение",
    description: "Ваши числа совпадают. Вы смотрите на мир одинаково и понимаете друг друга с полуслова.",
    strengths: &[
        "Глубокое взаимопонимание без лишних слов",
        "Общие ценности и жизненные цели",
        "Схожий ритм жизни и темперамент",
        "Естественная поддержка в начинаниях друг друга",
    ],
    challenges: &[
        "Риск однообразия и застоя в отношениях",
        "Общие слабые стороны усиливают друг друга",
        "Сложно взглянуть на ситуацию со стороны",
    ],
};

static CLOSE: Analysis = Analysis {
    category: AnalysisCategory::Close,
    title: "Высокая совместимость",
    description: "Ваши числа близки. Вы легко находите общий язык и при этом дополняете друг друга.",
    strengths: &[
        "Лёгкое общение и быстрое сближение",
        "Различия дополняют, а не разделяют",
        "Совместный рост и развитие",
        "Устойчивое доверие",
    ],
    challenges: &[
        "Мелкие различия во взглядах требуют внимания",
        "Важно не принимать гармонию как должное",
        "Нужно договариваться о личном пространстве",
    ],
};

static MODERATE: Analysis = Analysis {
    category: AnalysisCategory::Moderate,
    title: "Умеренная совместимость",
    description: "Между вами есть заметные различия. Отношения потребуют усилий, но могут многому научить обоих.",
    strengths: &[
        "Новый взгляд на привычные вещи",
        "Возможность учиться друг у друга",
        "Баланс разных темпераментов",
    ],
    challenges: &[
        "Разные ожидания от отношений",
        "Частые компромиссы в бытовых вопросах",
        "Нужна открытая и честная коммуникация",
        "Терпение к непохожим привычкам партнёра",
    ],
};

static CHALLENGING: Analysis = Analysis {
    category: AnalysisCategory::Challenging,
    title: "Непростая совместимость",
    description: "Ваши числа далеки друг от друга. Это союз противоположностей, который требует много терпения и работы.",
    strengths: &[
        "Сильное взаимное притяжение противоположностей",
        "Мощный стимул для личностного роста",
        "Широкий взгляд на жизнь благодаря различиям",
    ],
    challenges: &[
        "Разные жизненные приоритеты",
        "Частые недопонимания",
        "Борьба за лидерство в паре",
        "Требуется постоянная работа над отношениями",
        "Сложно найти общий ритм жизни",
    ],
};

/// Classify a compatibility percentage
///
/// 100 is identical, 70 and above is close, 55 and above is moderate,
/// everything else is challenging.
pub fn classify(percent: u8) -> AnalysisCategory {
    match percent {
        100 => AnalysisCategory::Identical,
        70..=255 => AnalysisCategory::Close,
        55..=69 => AnalysisCategory::Moderate,
        _ => AnalysisCategory::Challenging,
    }
}

/// Fixed narrative for a category
pub fn narrative(category: AnalysisCategory) -> &'static Analysis {
    match category {
        AnalysisCategory::Identical => &IDENTICAL,
        AnalysisCategory::Close => &CLOSE,
        AnalysisCategory::Moderate => &MODERATE,
        AnalysisCategory::Challenging => &CHALLENGING,
    }
}

/// Classify a score and return its narrative
pub fn analyze(score: CompatibilityScore) -> &'static Analysis {
    narrative(classify(score.percent()))
}
