//! Content ratings under national classification schemes.
//!
//! Each scheme has its own closed set of literals; a rating outside the set
//! fails to decode. Schemes are sorted by their wire key.

use crate::field::Field;

string_enum! {
    /// Australian Classification Board (ACB) or Australian Communications and Media Authority (ACMA).
    pub enum AcbRating {
        AcbUnspecified => "acbUnspecified",
        AcbE => "acbE",
        AcbP => "acbP",
        AcbC => "acbC",
        AcbG => "acbG",
        AcbPg => "acbPg",
        AcbM => "acbM",
        AcbMa15plus => "acbMa15plus",
        AcbR18plus => "acbR18plus",
        AcbUnrated => "acbUnrated",
    }
}

string_enum! {
    /// Italy's Autorità per le Garanzie nelle Comunicazioni (AGCOM).
    pub enum AgcomRating {
        AgcomUnspecified => "agcomUnspecified",
        AgcomT => "agcomT",
        AgcomVm14 => "agcomVm14",
        AgcomVm18 => "agcomVm18",
        AgcomUnrated => "agcomUnrated",
    }
}

string_enum! {
    /// Anatel (Asociación Nacional de Televisión), Chile.
    pub enum AnatelRating {
        AnatelUnspecified => "anatelUnspecified",
        AnatelF => "anatelF",
        AnatelI => "anatelI",
        AnatelI7 => "anatelI7",
        AnatelI10 => "anatelI10",
        AnatelI12 => "anatelI12",
        AnatelR => "anatelR",
        AnatelA => "anatelA",
        AnatelUnrated => "anatelUnrated",
    }
}

string_enum! {
    /// British Board of Film Classification (BBFC).
    pub enum BbfcRating {
        BbfcUnspecified => "bbfcUnspecified",
        BbfcU => "bbfcU",
        BbfcPg => "bbfcPg",
        Bbfc12a => "bbfc12a",
        Bbfc12 => "bbfc12",
        Bbfc15 => "bbfc15",
        Bbfc18 => "bbfc18",
        BbfcR18 => "bbfcR18",
        BbfcUnrated => "bbfcUnrated",
    }
}

string_enum! {
    /// Thailand's Board of Film and Video Censors.
    pub enum BfvcRating {
        BfvcUnspecified => "bfvcUnspecified",
        BfvcG => "bfvcG",
        BfvcE => "bfvcE",
        Bfvc13 => "bfvc13",
        Bfvc15 => "bfvc15",
        Bfvc18 => "bfvc18",
        Bfvc20 => "bfvc20",
        BfvcB => "bfvcB",
        BfvcUnrated => "bfvcUnrated",
    }
}

string_enum! {
    /// Austrian Board of Media Classification (Bundesministerium für Unterricht, Kunst und Kultur).
    pub enum BmukkRating {
        BmukkUnspecified => "bmukkUnspecified",
        BmukkAa => "bmukkAa",
        Bmukk6 => "bmukk6",
        Bmukk8 => "bmukk8",
        Bmukk10 => "bmukk10",
        Bmukk12 => "bmukk12",
        Bmukk14 => "bmukk14",
        Bmukk16 => "bmukk16",
        BmukkUnrated => "bmukkUnrated",
    }
}

string_enum! {
    /// Canadian Radio-Television and Telecommunications Commission, English-language broadcasts.
    pub enum CatvRating {
        CatvUnspecified => "catvUnspecified",
        CatvC => "catvC",
        CatvC8 => "catvC8",
        CatvG => "catvG",
        CatvPg => "catvPg",
        Catv14plus => "catv14plus",
        Catv18plus => "catv18plus",
        CatvUnrated => "catvUnrated",
        CatvE => "catvE",
    }
}

string_enum! {
    /// Canadian Radio-Television and Telecommunications Commission, French-language broadcasts.
    pub enum CatvfrRating {
        CatvfrUnspecified => "catvfrUnspecified",
        CatvfrG => "catvfrG",
        Catvfr8plus => "catvfr8plus",
        Catvfr13plus => "catvfr13plus",
        Catvfr16plus => "catvfr16plus",
        Catvfr18plus => "catvfr18plus",
        CatvfrUnrated => "catvfrUnrated",
        CatvfrE => "catvfrE",
    }
}

string_enum! {
    /// India's Central Board of Film Certification (CBFC).
    pub enum CbfcRating {
        CbfcUnspecified => "cbfcUnspecified",
        CbfcU => "cbfcU",
        CbfcUA => "cbfcUA",
        CbfcUA7plus => "cbfcUA7plus",
        CbfcUA13plus => "cbfcUA13plus",
        CbfcUA16plus => "cbfcUA16plus",
        CbfcA => "cbfcA",
        CbfcS => "cbfcS",
        CbfcUnrated => "cbfcUnrated",
    }
}

string_enum! {
    /// Chile's Consejo de Calificación Cinematográfica.
    pub enum CccRating {
        CccUnspecified => "cccUnspecified",
        CccTe => "cccTe",
        Ccc6 => "ccc6",
        Ccc14 => "ccc14",
        Ccc18 => "ccc18",
        Ccc18v => "ccc18v",
        Ccc18s => "ccc18s",
        CccUnrated => "cccUnrated",
    }
}

string_enum! {
    /// Portugal's Comissão de Classificação de Espectáculos.
    pub enum CceRating {
        CceUnspecified => "cceUnspecified",
        CceM4 => "cceM4",
        CceM6 => "cceM6",
        CceM12 => "cceM12",
        CceM16 => "cceM16",
        CceM18 => "cceM18",
        CceUnrated => "cceUnrated",
        CceM14 => "cceM14",
    }
}

string_enum! {
    /// Switzerland.
    pub enum ChfilmRating {
        ChfilmUnspecified => "chfilmUnspecified",
        Chfilm0 => "chfilm0",
        Chfilm6 => "chfilm6",
        Chfilm12 => "chfilm12",
        Chfilm16 => "chfilm16",
        Chfilm18 => "chfilm18",
        ChfilmUnrated => "chfilmUnrated",
    }
}

string_enum! {
    /// Canadian Home Video Rating System (CHVRS).
    pub enum ChvrsRating {
        ChvrsUnspecified => "chvrsUnspecified",
        ChvrsG => "chvrsG",
        ChvrsPg => "chvrsPg",
        Chvrs14a => "chvrs14a",
        Chvrs18a => "chvrs18a",
        ChvrsR => "chvrsR",
        ChvrsE => "chvrsE",
        ChvrsUnrated => "chvrsUnrated",
    }
}

string_enum! {
    /// Commission de Contrôle des Films, Belgium.
    pub enum CicfRating {
        CicfUnspecified => "cicfUnspecified",
        CicfE => "cicfE",
        CicfKtEa => "cicfKtEa",
        CicfKntEna => "cicfKntEna",
        CicfUnrated => "cicfUnrated",
    }
}

string_enum! {
    /// Romania's Consiliul National al Audiovizualului (CNA).
    pub enum CnaRating {
        CnaUnspecified => "cnaUnspecified",
        CnaAp => "cnaAp",
        Cna12 => "cna12",
        Cna15 => "cna15",
        Cna18 => "cna18",
        Cna18plus => "cna18plus",
        CnaUnrated => "cnaUnrated",
    }
}

string_enum! {
    /// France's Centre national du cinéma et de l'image animée.
    pub enum CncRating {
        CncUnspecified => "cncUnspecified",
        CncT => "cncT",
        Cnc10 => "cnc10",
        Cnc12 => "cnc12",
        Cnc16 => "cnc16",
        Cnc18 => "cnc18",
        CncE => "cncE",
        CncInterdiction => "cncInterdiction",
        CncUnrated => "cncUnrated",
    }
}

string_enum! {
    /// France's Conseil supérieur de l'audiovisuel, for television broadcasts.
    pub enum CsaRating {
        CsaUnspecified => "csaUnspecified",
        CsaT => "csaT",
        Csa10 => "csa10",
        Csa12 => "csa12",
        Csa16 => "csa16",
        Csa18 => "csa18",
        CsaInterdiction => "csaInterdiction",
        CsaUnrated => "csaUnrated",
    }
}

string_enum! {
    /// Luxembourg's Commission de surveillance de la classification des films (CSCF).
    pub enum CscfRating {
        CscfUnspecified => "cscfUnspecified",
        CscfAl => "cscfAl",
        CscfA => "cscfA",
        Cscf6 => "cscf6",
        Cscf9 => "cscf9",
        Cscf12 => "cscf12",
        Cscf16 => "cscf16",
        Cscf18 => "cscf18",
        CscfUnrated => "cscfUnrated",
    }
}

string_enum! {
    /// Czech Republic.
    pub enum CzfilmRating {
        CzfilmUnspecified => "czfilmUnspecified",
        CzfilmU => "czfilmU",
        Czfilm12 => "czfilm12",
        Czfilm14 => "czfilm14",
        Czfilm18 => "czfilm18",
        CzfilmUnrated => "czfilmUnrated",
    }
}

string_enum! {
    /// Brazil's Departamento de Justiça, Classificação, Qualificação e Títulos (DJCQT).
    pub enum DjctqRating {
        DjctqUnspecified => "djctqUnspecified",
        DjctqL => "djctqL",
        Djctq10 => "djctq10",
        Djctq12 => "djctq12",
        Djctq14 => "djctq14",
        Djctq16 => "djctq16",
        Djctq18 => "djctq18",
        DjctqEr => "djctqEr",
        DjctqL10 => "djctqL10",
        DjctqL12 => "djctqL12",
        DjctqL14 => "djctqL14",
        DjctqL16 => "djctqL16",
        DjctqL18 => "djctqL18",
        Djctq1012 => "djctq1012",
        Djctq1014 => "djctq1014",
        Djctq1016 => "djctq1016",
        Djctq1018 => "djctq1018",
        Djctq1214 => "djctq1214",
        Djctq1216 => "djctq1216",
        Djctq1218 => "djctq1218",
        Djctq1416 => "djctq1416",
        Djctq1418 => "djctq1418",
        Djctq1618 => "djctq1618",
        DjctqUnrated => "djctqUnrated",
    }
}

string_enum! {
    /// Turkey's Evaluation and Classification Board of the Ministry of Culture and Tourism (ECBMCT).
    pub enum EcbmctRating {
        EcbmctUnspecified => "ecbmctUnspecified",
        EcbmctG => "ecbmctG",
        Ecbmct7a => "ecbmct7a",
        Ecbmct7plus => "ecbmct7plus",
        Ecbmct13a => "ecbmct13a",
        Ecbmct13plus => "ecbmct13plus",
        Ecbmct15a => "ecbmct15a",
        Ecbmct15plus => "ecbmct15plus",
        Ecbmct18plus => "ecbmct18plus",
        EcbmctUnrated => "ecbmctUnrated",
    }
}

string_enum! {
    /// Estonia.
    pub enum EefilmRating {
        EefilmUnspecified => "eefilmUnspecified",
        EefilmPere => "eefilmPere",
        EefilmL => "eefilmL",
        EefilmMs6 => "eefilmMs6",
        EefilmK6 => "eefilmK6",
        EefilmMs12 => "eefilmMs12",
        EefilmK12 => "eefilmK12",
        EefilmK14 => "eefilmK14",
        EefilmK16 => "eefilmK16",
        EefilmUnrated => "eefilmUnrated",
    }
}

string_enum! {
    /// Egypt.
    pub enum EgfilmRating {
        EgfilmUnspecified => "egfilmUnspecified",
        EgfilmGn => "egfilmGn",
        Egfilm18 => "egfilm18",
        EgfilmBn => "egfilmBn",
        EgfilmUnrated => "egfilmUnrated",
    }
}

string_enum! {
    /// Japan's Eirin.
    pub enum EirinRating {
        EirinUnspecified => "eirinUnspecified",
        EirinG => "eirinG",
        EirinPg12 => "eirinPg12",
        EirinR15plus => "eirinR15plus",
        EirinR18plus => "eirinR18plus",
        EirinUnrated => "eirinUnrated",
    }
}

string_enum! {
    /// Malaysia's Film Censorship Board.
    pub enum FcbmRating {
        FcbmUnspecified => "fcbmUnspecified",
        FcbmU => "fcbmU",
        FcbmPg13 => "fcbmPg13",
        FcbmP13 => "fcbmP13",
        Fcbm18 => "fcbm18",
        Fcbm18sx => "fcbm18sx",
        Fcbm18pa => "fcbm18pa",
        Fcbm18sg => "fcbm18sg",
        Fcbm18pl => "fcbm18pl",
        FcbmUnrated => "fcbmUnrated",
    }
}

string_enum! {
    /// Hong Kong's Office for Film, Newspaper and Article Administration.
    pub enum FcoRating {
        FcoUnspecified => "fcoUnspecified",
        FcoI => "fcoI",
        FcoIia => "fcoIia",
        FcoIib => "fcoIib",
        FcoIi => "fcoIi",
        FcoIii => "fcoIii",
        FcoUnrated => "fcoUnrated",
    }
}

string_enum! {
    /// France's Ministère de la Culture et de la Communication; superseded by `cncRating`.
    pub enum FmocRating {
        FmocUnspecified => "fmocUnspecified",
        FmocU => "fmocU",
        Fmoc10 => "fmoc10",
        Fmoc12 => "fmoc12",
        Fmoc16 => "fmoc16",
        Fmoc18 => "fmoc18",
        FmocE => "fmocE",
        FmocUnrated => "fmocUnrated",
    }
}

string_enum! {
    /// South Africa's Film and Publication Board.
    pub enum FpbRating {
        FpbUnspecified => "fpbUnspecified",
        FpbA => "fpbA",
        FpbPg => "fpbPg",
        Fpb79Pg => "fpb79Pg",
        Fpb1012Pg => "fpb1012Pg",
        Fpb13 => "fpb13",
        Fpb16 => "fpb16",
        Fpb18 => "fpb18",
        FpbX18 => "fpbX18",
        FpbXx => "fpbXx",
        FpbUnrated => "fpbUnrated",
        Fpb10 => "fpb10",
    }
}

string_enum! {
    /// Germany's Freiwillige Selbstkontrolle der Filmwirtschaft (FSK).
    pub enum FskRating {
        FskUnspecified => "fskUnspecified",
        Fsk0 => "fsk0",
        Fsk6 => "fsk6",
        Fsk12 => "fsk12",
        Fsk16 => "fsk16",
        Fsk18 => "fsk18",
        FskUnrated => "fskUnrated",
    }
}

string_enum! {
    /// Greece.
    pub enum GrfilmRating {
        GrfilmUnspecified => "grfilmUnspecified",
        GrfilmK => "grfilmK",
        GrfilmE => "grfilmE",
        GrfilmK12 => "grfilmK12",
        GrfilmK13 => "grfilmK13",
        GrfilmK15 => "grfilmK15",
        GrfilmK17 => "grfilmK17",
        GrfilmK18 => "grfilmK18",
        GrfilmUnrated => "grfilmUnrated",
    }
}

string_enum! {
    /// Spain's Instituto de la Cinematografía y de las Artes Audiovisuales (ICAA).
    pub enum IcaaRating {
        IcaaUnspecified => "icaaUnspecified",
        IcaaApta => "icaaApta",
        Icaa7 => "icaa7",
        Icaa12 => "icaa12",
        Icaa13 => "icaa13",
        Icaa16 => "icaa16",
        Icaa18 => "icaa18",
        IcaaX => "icaaX",
        IcaaUnrated => "icaaUnrated",
    }
}

string_enum! {
    /// Ireland's Irish Film Classification Office (IFCO).
    pub enum IfcoRating {
        IfcoUnspecified => "ifcoUnspecified",
        IfcoG => "ifcoG",
        IfcoPg => "ifcoPg",
        Ifco12 => "ifco12",
        Ifco12a => "ifco12a",
        Ifco15 => "ifco15",
        Ifco15a => "ifco15a",
        Ifco16 => "ifco16",
        Ifco18 => "ifco18",
        IfcoUnrated => "ifcoUnrated",
    }
}

string_enum! {
    /// Israel.
    pub enum IlfilmRating {
        IlfilmUnspecified => "ilfilmUnspecified",
        IlfilmAa => "ilfilmAa",
        Ilfilm12 => "ilfilm12",
        Ilfilm14 => "ilfilm14",
        Ilfilm16 => "ilfilm16",
        Ilfilm18 => "ilfilm18",
        IlfilmUnrated => "ilfilmUnrated",
    }
}

string_enum! {
    /// Argentina's Instituto Nacional de Cine y Artes Audiovisuales (INCAA).
    pub enum IncaaRating {
        IncaaUnspecified => "incaaUnspecified",
        IncaaAtp => "incaaAtp",
        IncaaSam13 => "incaaSam13",
        IncaaSam16 => "incaaSam16",
        IncaaSam18 => "incaaSam18",
        IncaaC => "incaaC",
        IncaaUnrated => "incaaUnrated",
    }
}

string_enum! {
    /// Kenya Film Classification Board.
    pub enum KfcbRating {
        KfcbUnspecified => "kfcbUnspecified",
        KfcbG => "kfcbG",
        KfcbPg => "kfcbPg",
        Kfcb16plus => "kfcb16plus",
        KfcbR => "kfcbR",
        KfcbUnrated => "kfcbUnrated",
    }
}

string_enum! {
    /// The Netherlands' Nederlands Instituut voor de Classificatie van Audiovisuele Media (Kijkwijzer).
    pub enum KijkwijzerRating {
        KijkwijzerUnspecified => "kijkwijzerUnspecified",
        KijkwijzerAl => "kijkwijzerAl",
        Kijkwijzer6 => "kijkwijzer6",
        Kijkwijzer9 => "kijkwijzer9",
        Kijkwijzer12 => "kijkwijzer12",
        Kijkwijzer16 => "kijkwijzer16",
        Kijkwijzer18 => "kijkwijzer18",
        KijkwijzerUnrated => "kijkwijzerUnrated",
    }
}

string_enum! {
    /// South Korea's Korea Media Rating Board.
    pub enum KmrbRating {
        KmrbUnspecified => "kmrbUnspecified",
        KmrbAll => "kmrbAll",
        Kmrb12plus => "kmrb12plus",
        Kmrb15plus => "kmrb15plus",
        KmrbTeenr => "kmrbTeenr",
        KmrbR => "kmrbR",
        KmrbUnrated => "kmrbUnrated",
    }
}

string_enum! {
    /// Indonesia's Lembaga Sensor Film.
    pub enum LsfRating {
        LsfUnspecified => "lsfUnspecified",
        LsfSu => "lsfSu",
        LsfA => "lsfA",
        LsfBo => "lsfBo",
        Lsf13 => "lsf13",
        LsfR => "lsfR",
        Lsf17 => "lsf17",
        LsfD => "lsfD",
        Lsf21 => "lsf21",
        LsfUnrated => "lsfUnrated",
    }
}

string_enum! {
    /// Malta's Film Age-Classification Board.
    pub enum MccaaRating {
        MccaaUnspecified => "mccaaUnspecified",
        MccaaU => "mccaaU",
        MccaaPg => "mccaaPg",
        Mccaa12a => "mccaa12a",
        Mccaa12 => "mccaa12",
        Mccaa14 => "mccaa14",
        Mccaa15 => "mccaa15",
        Mccaa16 => "mccaa16",
        Mccaa18 => "mccaa18",
        MccaaUnrated => "mccaaUnrated",
    }
}

string_enum! {
    /// Denmark's Medierådet for Børn og Unge.
    pub enum MccypRating {
        MccypUnspecified => "mccypUnspecified",
        MccypA => "mccypA",
        Mccyp7 => "mccyp7",
        Mccyp11 => "mccyp11",
        Mccyp15 => "mccyp15",
        MccypUnrated => "mccypUnrated",
    }
}

string_enum! {
    /// Vietnam's Ministry of Culture, Sports and Tourism.
    pub enum McstRating {
        McstUnspecified => "mcstUnspecified",
        McstAllAges => "mcstAllAges",
        McstGPg => "mcstGPg",
        Mcst0 => "mcst0",
        Mcst16plus => "mcst16plus",
        McstUnrated => "mcstUnrated",
    }
}

string_enum! {
    /// Singapore's Media Development Authority.
    pub enum MdaRating {
        MdaUnspecified => "mdaUnspecified",
        MdaG => "mdaG",
        MdaPg => "mdaPg",
        MdaPg13 => "mdaPg13",
        MdaNc16 => "mdaNc16",
        MdaM18 => "mdaM18",
        MdaR21 => "mdaR21",
        MdaUnrated => "mdaUnrated",
    }
}

string_enum! {
    /// Norway's Medietilsynet.
    pub enum MedietilsynetRating {
        MedietilsynetUnspecified => "medietilsynetUnspecified",
        MedietilsynetA => "medietilsynetA",
        Medietilsynet6 => "medietilsynet6",
        Medietilsynet7 => "medietilsynet7",
        Medietilsynet9 => "medietilsynet9",
        Medietilsynet11 => "medietilsynet11",
        Medietilsynet12 => "medietilsynet12",
        Medietilsynet15 => "medietilsynet15",
        Medietilsynet18 => "medietilsynet18",
        MedietilsynetUnrated => "medietilsynetUnrated",
    }
}

string_enum! {
    /// Finland's Kansallinen Audiovisuaalinen Instituutti (MEKU).
    pub enum MekuRating {
        MekuUnspecified => "mekuUnspecified",
        MekuS => "mekuS",
        Meku7 => "meku7",
        Meku12 => "meku12",
        Meku16 => "meku16",
        Meku18 => "meku18",
        MekuUnrated => "mekuUnrated",
    }
}

string_enum! {
    /// Motion Picture Association of America ratings used in the Middle East and North Africa.
    pub enum MenaMpaaRating {
        MenaMpaaUnspecified => "menaMpaaUnspecified",
        MenaMpaaG => "menaMpaaG",
        MenaMpaaPg => "menaMpaaPg",
        MenaMpaaPg13 => "menaMpaaPg13",
        MenaMpaaR => "menaMpaaR",
        MenaMpaaUnrated => "menaMpaaUnrated",
    }
}

string_enum! {
    /// Italy's Ministero dei Beni e delle Attività Culturali e del Turismo.
    pub enum MibacRating {
        MibacUnspecified => "mibacUnspecified",
        MibacT => "mibacT",
        MibacVap => "mibacVap",
        MibacVm6 => "mibacVm6",
        MibacVm12 => "mibacVm12",
        MibacVm14 => "mibacVm14",
        MibacVm16 => "mibacVm16",
        MibacVm18 => "mibacVm18",
        MibacUnrated => "mibacUnrated",
    }
}

string_enum! {
    /// Colombia's Ministerio de Cultura.
    pub enum MocRating {
        MocUnspecified => "mocUnspecified",
        MocE => "mocE",
        MocT => "mocT",
        Moc7 => "moc7",
        Moc12 => "moc12",
        Moc15 => "moc15",
        Moc18 => "moc18",
        MocX => "mocX",
        MocBanned => "mocBanned",
        MocUnrated => "mocUnrated",
    }
}

string_enum! {
    /// Taiwan's Ministry of Culture.
    pub enum MoctwRating {
        MoctwUnspecified => "moctwUnspecified",
        MoctwG => "moctwG",
        MoctwP => "moctwP",
        MoctwPg => "moctwPg",
        MoctwR => "moctwR",
        MoctwUnrated => "moctwUnrated",
        MoctwR12 => "moctwR12",
        MoctwR15 => "moctwR15",
    }
}

string_enum! {
    /// Motion Picture Association of America (MPAA).
    pub enum MpaaRating {
        MpaaUnspecified => "mpaaUnspecified",
        MpaaG => "mpaaG",
        MpaaPg => "mpaaPg",
        MpaaPg13 => "mpaaPg13",
        MpaaR => "mpaaR",
        MpaaNc17 => "mpaaNc17",
        MpaaX => "mpaaX",
        MpaaUnrated => "mpaaUnrated",
    }
}

string_enum! {
    /// Motion Picture Association of America ratings for movie trailers and previews.
    pub enum MpaatRating {
        MpaatUnspecified => "mpaatUnspecified",
        MpaatGb => "mpaatGb",
        MpaatRb => "mpaatRb",
    }
}

string_enum! {
    /// The Philippines' Movie and Television Review and Classification Board.
    pub enum MtrcbRating {
        MtrcbUnspecified => "mtrcbUnspecified",
        MtrcbG => "mtrcbG",
        MtrcbPg => "mtrcbPg",
        MtrcbR13 => "mtrcbR13",
        MtrcbR16 => "mtrcbR16",
        MtrcbR18 => "mtrcbR18",
        MtrcbX => "mtrcbX",
        MtrcbUnrated => "mtrcbUnrated",
    }
}

string_enum! {
    /// The Maldives' National Bureau of Classification.
    pub enum NbcRating {
        NbcUnspecified => "nbcUnspecified",
        NbcG => "nbcG",
        NbcPg => "nbcPg",
        Nbc12plus => "nbc12plus",
        Nbc15plus => "nbc15plus",
        Nbc18plus => "nbc18plus",
        Nbc18plusr => "nbc18plusr",
        NbcPu => "nbcPu",
        NbcUnrated => "nbcUnrated",
    }
}

string_enum! {
    /// Poland.
    pub enum NbcplRating {
        NbcplUnspecified => "nbcplUnspecified",
        NbcplI => "nbcplI",
        NbcplIi => "nbcplIi",
        NbcplIii => "nbcplIii",
        NbcplIv => "nbcplIv",
        Nbcpl18plus => "nbcpl18plus",
        NbcplUnrated => "nbcplUnrated",
    }
}

string_enum! {
    /// Bulgaria's National Film Center.
    pub enum NfrcRating {
        NfrcUnspecified => "nfrcUnspecified",
        NfrcA => "nfrcA",
        NfrcB => "nfrcB",
        NfrcC => "nfrcC",
        NfrcD => "nfrcD",
        NfrcX => "nfrcX",
        NfrcUnrated => "nfrcUnrated",
    }
}

string_enum! {
    /// Nigeria's National Film and Video Censors Board.
    pub enum NfvcbRating {
        NfvcbUnspecified => "nfvcbUnspecified",
        NfvcbG => "nfvcbG",
        NfvcbPg => "nfvcbPg",
        Nfvcb12 => "nfvcb12",
        Nfvcb12a => "nfvcb12a",
        Nfvcb15 => "nfvcb15",
        Nfvcb18 => "nfvcb18",
        NfvcbRe => "nfvcbRe",
        NfvcbUnrated => "nfvcbUnrated",
    }
}

string_enum! {
    /// Latvia's National Film Center.
    pub enum NkclvRating {
        NkclvUnspecified => "nkclvUnspecified",
        NkclvU => "nkclvU",
        Nkclv7plus => "nkclv7plus",
        Nkclv12plus => "nkclv12plus",
        Nkclv16plus => "nkclv16plus",
        Nkclv18plus => "nkclv18plus",
        NkclvUnrated => "nkclvUnrated",
    }
}

string_enum! {
    /// The National Media Council ratings system for the United Arab Emirates.
    pub enum NmcRating {
        NmcUnspecified => "nmcUnspecified",
        NmcG => "nmcG",
        NmcPg => "nmcPg",
        NmcPg13 => "nmcPg13",
        NmcPg15 => "nmcPg15",
        Nmc15plus => "nmc15plus",
        Nmc18plus => "nmc18plus",
        Nmc18tc => "nmc18tc",
        NmcUnrated => "nmcUnrated",
    }
}

string_enum! {
    /// New Zealand's Office of Film and Literature Classification.
    pub enum OflcRating {
        OflcUnspecified => "oflcUnspecified",
        OflcG => "oflcG",
        OflcPg => "oflcPg",
        OflcM => "oflcM",
        OflcR13 => "oflcR13",
        OflcR15 => "oflcR15",
        OflcR16 => "oflcR16",
        OflcR18 => "oflcR18",
        OflcUnrated => "oflcUnrated",
        OflcRp13 => "oflcRp13",
        OflcRp16 => "oflcRp16",
        OflcRp18 => "oflcRp18",
    }
}

string_enum! {
    /// Peru.
    pub enum PefilmRating {
        PefilmUnspecified => "pefilmUnspecified",
        PefilmPt => "pefilmPt",
        PefilmPg => "pefilmPg",
        Pefilm14 => "pefilm14",
        Pefilm18 => "pefilm18",
        PefilmUnrated => "pefilmUnrated",
    }
}

string_enum! {
    /// Hungary's Nemzeti Filmiroda, the Rating Committee of the National Office of Film.
    pub enum RcnofRating {
        RcnofUnspecified => "rcnofUnspecified",
        RcnofI => "rcnofI",
        RcnofIi => "rcnofIi",
        RcnofIii => "rcnofIii",
        RcnofIv => "rcnofIv",
        RcnofV => "rcnofV",
        RcnofVi => "rcnofVi",
        RcnofUnrated => "rcnofUnrated",
    }
}

string_enum! {
    /// Venezuela.
    pub enum ResorteviolenciaRating {
        ResorteviolenciaUnspecified => "resorteviolenciaUnspecified",
        ResorteviolenciaA => "resorteviolenciaA",
        ResorteviolenciaB => "resorteviolenciaB",
        ResorteviolenciaC => "resorteviolenciaC",
        ResorteviolenciaD => "resorteviolenciaD",
        ResorteviolenciaE => "resorteviolenciaE",
        ResorteviolenciaUnrated => "resorteviolenciaUnrated",
    }
}

string_enum! {
    /// Mexico's General Directorate of Radio, Television and Cinematography (RTC).
    pub enum RtcRating {
        RtcUnspecified => "rtcUnspecified",
        RtcAa => "rtcAa",
        RtcA => "rtcA",
        RtcB => "rtcB",
        RtcB15 => "rtcB15",
        RtcC => "rtcC",
        RtcD => "rtcD",
        RtcUnrated => "rtcUnrated",
    }
}

string_enum! {
    /// Ireland's Raidió Teilifís Éireann.
    pub enum RteRating {
        RteUnspecified => "rteUnspecified",
        RteGa => "rteGa",
        RteCh => "rteCh",
        RtePs => "rtePs",
        RteMa => "rteMa",
        RteUnrated => "rteUnrated",
    }
}

string_enum! {
    /// Russia's Ministry of Culture.
    pub enum RussiaRating {
        RussiaUnspecified => "russiaUnspecified",
        Russia0 => "russia0",
        Russia6 => "russia6",
        Russia12 => "russia12",
        Russia16 => "russia16",
        Russia18 => "russia18",
        RussiaUnrated => "russiaUnrated",
    }
}

string_enum! {
    /// Slovakia.
    pub enum SkfilmRating {
        SkfilmUnspecified => "skfilmUnspecified",
        SkfilmG => "skfilmG",
        SkfilmP2 => "skfilmP2",
        SkfilmP5 => "skfilmP5",
        SkfilmP8 => "skfilmP8",
        SkfilmUnrated => "skfilmUnrated",
    }
}

string_enum! {
    /// Iceland.
    pub enum SmaisRating {
        SmaisUnspecified => "smaisUnspecified",
        SmaisL => "smaisL",
        Smais7 => "smais7",
        Smais12 => "smais12",
        Smais14 => "smais14",
        Smais16 => "smais16",
        Smais18 => "smais18",
        SmaisUnrated => "smaisUnrated",
    }
}

string_enum! {
    /// Sweden's Statens medieråd (National Media Council).
    pub enum SmsaRating {
        SmsaUnspecified => "smsaUnspecified",
        SmsaG => "smsaG",
        Smsa7 => "smsa7",
        Smsa11 => "smsa11",
        Smsa15 => "smsa15",
        SmsaA => "smsaA",
        SmsaUnrated => "smsaUnrated",
    }
}

string_enum! {
    /// The TV Parental Guidelines (TVPG).
    pub enum TvpgRating {
        TvpgUnspecified => "tvpgUnspecified",
        TvpgY => "tvpgY",
        TvpgY7 => "tvpgY7",
        TvpgY7Fv => "tvpgY7Fv",
        TvpgG => "tvpgG",
        TvpgPg => "tvpgPg",
        Pg14 => "pg14",
        TvpgMa => "tvpgMa",
        TvpgUnrated => "tvpgUnrated",
    }
}

string_enum! {
    /// YouTube's own rating, used to mark age-restricted content.
    pub enum YtRating {
        YtUnspecified => "ytUnspecified",
        YtAgeRestricted => "ytAgeRestricted",
    }
}

string_enum! {
    /// Reasons for a `djctqRating`.
    pub enum DjctqRatingReason {
        DjctqRatingReasonUnspecified => "djctqRatingReasonUnspecified",
        DjctqViolence => "djctqViolence",
        DjctqExtremeViolence => "djctqExtremeViolence",
        DjctqSexualContent => "djctqSexualContent",
        DjctqNudity => "djctqNudity",
        DjctqSex => "djctqSex",
        DjctqExplicitSex => "djctqExplicitSex",
        DjctqDrugs => "djctqDrugs",
        DjctqLegalDrugs => "djctqLegalDrugs",
        DjctqIllegalDrugs => "djctqIllegalDrugs",
        DjctqInappropriateLanguage => "djctqInappropriateLanguage",
        DjctqCriminalActs => "djctqCriminalActs",
        DjctqImpactingContent => "djctqImpactingContent",
    }
}

string_enum! {
    /// Reasons for an `fpbRating`.
    pub enum FpbRatingReason {
        FpbRatingReasonUnspecified => "fpbRatingReasonUnspecified",
        FpbBlasphemy => "fpbBlasphemy",
        FpbLanguage => "fpbLanguage",
        FpbNudity => "fpbNudity",
        FpbPrejudice => "fpbPrejudice",
        FpbSex => "fpbSex",
        FpbViolence => "fpbViolence",
        FpbDrugs => "fpbDrugs",
        FpbSexualViolence => "fpbSexualViolence",
        FpbHorror => "fpbHorror",
        FpbCriminalTechniques => "fpbCriminalTechniques",
        FpbImitativeActsTechniques => "fpbImitativeActsTechniques",
    }
}

schema! {
    /// Ratings a video has received under national schemes. Keys are
    /// named after the scheme, e.g. `fskRating` for Germany's FSK.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails.contentRating>
    pub struct ContentRating {
        acb_rating: AcbRating,
        agcom_rating: AgcomRating,
        anatel_rating: AnatelRating,
        bbfc_rating: BbfcRating,
        bfvc_rating: BfvcRating,
        bmukk_rating: BmukkRating,
        catvfr_rating: CatvfrRating,
        catv_rating: CatvRating,
        cbfc_rating: CbfcRating,
        ccc_rating: CccRating,
        cce_rating: CceRating,
        chfilm_rating: ChfilmRating,
        chvrs_rating: ChvrsRating,
        cicf_rating: CicfRating,
        cna_rating: CnaRating,
        cnc_rating: CncRating,
        csa_rating: CsaRating,
        cscf_rating: CscfRating,
        czfilm_rating: CzfilmRating,
        djctq_rating: DjctqRating,
        djctq_rating_reasons: Vec<DjctqRatingReason>,
        ecbmct_rating: EcbmctRating,
        eefilm_rating: EefilmRating,
        egfilm_rating: EgfilmRating,
        eirin_rating: EirinRating,
        fcbm_rating: FcbmRating,
        fco_rating: FcoRating,
        fmoc_rating: FmocRating,
        fpb_rating: FpbRating,
        fpb_rating_reasons: Vec<FpbRatingReason>,
        fsk_rating: FskRating,
        grfilm_rating: GrfilmRating,
        icaa_rating: IcaaRating,
        ifco_rating: IfcoRating,
        ilfilm_rating: IlfilmRating,
        incaa_rating: IncaaRating,
        kfcb_rating: KfcbRating,
        kijkwijzer_rating: KijkwijzerRating,
        kmrb_rating: KmrbRating,
        lsf_rating: LsfRating,
        mccaa_rating: MccaaRating,
        mccyp_rating: MccypRating,
        mcst_rating: McstRating,
        mda_rating: MdaRating,
        medietilsynet_rating: MedietilsynetRating,
        meku_rating: MekuRating,
        mena_mpaa_rating: MenaMpaaRating,
        mibac_rating: MibacRating,
        moc_rating: MocRating,
        moctw_rating: MoctwRating,
        mpaa_rating: MpaaRating,
        mpaat_rating: MpaatRating,
        mtrcb_rating: MtrcbRating,
        nbcpl_rating: NbcplRating,
        nbc_rating: NbcRating,
        nfrc_rating: NfrcRating,
        nfvcb_rating: NfvcbRating,
        nkclv_rating: NkclvRating,
        nmc_rating: NmcRating,
        oflc_rating: OflcRating,
        pefilm_rating: PefilmRating,
        rcnof_rating: RcnofRating,
        resorteviolencia_rating: ResorteviolenciaRating,
        rtc_rating: RtcRating,
        rte_rating: RteRating,
        russia_rating: RussiaRating,
        skfilm_rating: SkfilmRating,
        smais_rating: SmaisRating,
        smsa_rating: SmsaRating,
        tvpg_rating: TvpgRating,
        yt_rating: YtRating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn national_schemes_round_trip() {
        let payload = json!({
            "acbRating": "acbMa15plus",
            "djctqRating": "djctq14",
            "djctqRatingReasons": ["djctqViolence", "djctqDrugs"],
            "fskRating": "fsk16",
            "menaMpaaRating": "menaMpaaPg13",
            "tvpgRating": "pg14"
        });

        let rating: ContentRating = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(rating.fsk_rating, Field::Present(FskRating::Fsk16));
        assert_eq!(rating.acb_rating, Field::Present(AcbRating::AcbMa15plus));
        assert_eq!(
            rating.djctq_rating_reasons,
            Field::Present(vec![DjctqRatingReason::DjctqViolence, DjctqRatingReason::DjctqDrugs])
        );
        assert!(rating.mpaa_rating.is_absent());
        assert_eq!(serde_json::to_value(&rating).unwrap(), payload);
    }

    #[test]
    fn literal_from_another_scheme_fails_decode() {
        let result = serde_json::from_value::<ContentRating>(json!({ "fskRating": "mpaaR" }));
        assert!(result.is_err());
    }
}
