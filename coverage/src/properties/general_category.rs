use icu_properties::GeneralCategory as IcuGeneralCategory;

/// основная категория символа (General Category, GC)
/// берется из данных ICU4X (icu_properties, compiled data)
/// варианты отсортированы таким образом, чтобы было проще применять побитовые операции для получения общей категории
///
/// общие категории:
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    Unassigned = 0, // 0b_0000_0000

    /// Lu - прописная буква
    UppercaseLetter = 1, // 0b_0000_0001
    /// Ll - строчная буква
    LowercaseLetter = 2, // 0b_0000_0010
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3, // 0b_0000_0011

    /// Lm - буква-модификатор
    ModifierLetter = 4, // 0b_0000_0100
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5, // 0b_0000_0101

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6, // 0b_0000_0110
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7, // 0b_0000_0111
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8, // 0b_0000_1000

    /// Nd - десятичная цифра
    DecimalNumber = 9, // 0b_0000_1001
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10, // 0b_0000_1010
    /// No - прочие числовые символы
    OtherNumber = 11, // 0b_0000_1011

    /// Zs - разделитель-пробел
    SpaceSeparator = 12, // 0b_0000_1100
    /// Zl - разделитель строки
    LineSeparator = 13, // 0b_0000_1101
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14, // 0b_0000_1110

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 16, // 0b_0001_0000
    /// Cf - управляющий символ форматирования
    Format = 17, // 0b_0001_0001
    /// Cs - символ-суррогат
    Surrogate = 18, // 0b_0001_0010
    /// Co - символ для приватного использования
    PrivateUse = 19, // 0b_0001_0011

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 20, // 0b_0001_0100
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 21, // 0b_0001_0101
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 22, // 0b_0001_0110
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 23, // 0b_0001_0111
    /// Pi - начальный знак цитаты
    InitialPunctuation = 24, // 0b_0001_1000
    /// Pf - конечный знак цитаты
    FinalPunctuation = 25, // 0b_0001_1001
    /// Po - знак препинания другого типа
    OtherPunctuation = 26, // 0b_0001_1010

    /// Sm - математический символ
    MathSymbol = 28, // 0b_0001_1100
    /// Sc - символ валюты
    CurrencySymbol = 29, // 0b_0001_1101
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 30, // 0b_0001_1110
    /// So - прочие символы
    OtherSymbol = 31, // 0b_0001_1111
}

impl GeneralCategory
{
    /// категория символа по данным ICU
    #[inline]
    pub fn of(code: u32) -> Self
    {
        Self::from(icu_properties::maps::general_category().get32(code))
    }

    /// относится-ли категория к разделителям (Z)
    #[inline]
    pub fn is_separator(&self) -> bool
    {
        u8::from(*self) & 0b_1111_1100 == 0b_0000_1100
    }

    /// относится-ли категория к управляющим символам (или не назначена) (C)
    #[inline]
    pub fn is_control(&self) -> bool
    {
        self.is_unassigned() || u8::from(*self) & 0b_1111_1100 == 0b_0001_0000
    }

    /// категория не назначена (Cn)
    #[inline]
    pub fn is_unassigned(&self) -> bool
    {
        u8::from(*self) == 0
    }
}

impl From<IcuGeneralCategory> for GeneralCategory
{
    fn from(value: IcuGeneralCategory) -> Self
    {
        match value {
            IcuGeneralCategory::Unassigned => Self::Unassigned,
            IcuGeneralCategory::UppercaseLetter => Self::UppercaseLetter,
            IcuGeneralCategory::LowercaseLetter => Self::LowercaseLetter,
            IcuGeneralCategory::TitlecaseLetter => Self::TitlecaseLetter,
            IcuGeneralCategory::ModifierLetter => Self::ModifierLetter,
            IcuGeneralCategory::OtherLetter => Self::OtherLetter,
            IcuGeneralCategory::NonspacingMark => Self::NonspacingMark,
            IcuGeneralCategory::SpacingMark => Self::SpacingMark,
            IcuGeneralCategory::EnclosingMark => Self::EnclosingMark,
            IcuGeneralCategory::DecimalNumber => Self::DecimalNumber,
            IcuGeneralCategory::LetterNumber => Self::LetterNumber,
            IcuGeneralCategory::OtherNumber => Self::OtherNumber,
            IcuGeneralCategory::SpaceSeparator => Self::SpaceSeparator,
            IcuGeneralCategory::LineSeparator => Self::LineSeparator,
            IcuGeneralCategory::ParagraphSeparator => Self::ParagraphSeparator,
            IcuGeneralCategory::Control => Self::Control,
            IcuGeneralCategory::Format => Self::Format,
            IcuGeneralCategory::Surrogate => Self::Surrogate,
            IcuGeneralCategory::PrivateUse => Self::PrivateUse,
            IcuGeneralCategory::ConnectorPunctuation => Self::ConnectorPunctuation,
            IcuGeneralCategory::DashPunctuation => Self::DashPunctuation,
            IcuGeneralCategory::OpenPunctuation => Self::OpenPunctuation,
            IcuGeneralCategory::ClosePunctuation => Self::ClosePunctuation,
            IcuGeneralCategory::InitialPunctuation => Self::InitialPunctuation,
            IcuGeneralCategory::FinalPunctuation => Self::FinalPunctuation,
            IcuGeneralCategory::OtherPunctuation => Self::OtherPunctuation,
            IcuGeneralCategory::MathSymbol => Self::MathSymbol,
            IcuGeneralCategory::CurrencySymbol => Self::CurrencySymbol,
            IcuGeneralCategory::ModifierSymbol => Self::ModifierSymbol,
            IcuGeneralCategory::OtherSymbol => Self::OtherSymbol,
        }
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}
