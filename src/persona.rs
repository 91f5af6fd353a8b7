use clap::ValueEnum;

/// 相談先の専門家（ペルソナ）
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Persona {
    /// 伝統文化の専門家
    Tradition,
    /// ローカルフードの専門家
    LocalFood,
}

impl Persona {
    /// 選択肢として提示する全ペルソナ
    pub const ALL: [Persona; 2] = [Persona::Tradition, Persona::LocalFood];

    /// 画面表示用の名称
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Tradition => "伝統文化の専門家",
            Persona::LocalFood => "ローカルフードの専門家",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
