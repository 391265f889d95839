// Generated from the Adobe Helvetica AFM metrics. Advance widths are relative
// to the point size; both tables are sorted by code point.

pub(crate) static HELVETICA_REGULAR: &[(char, f64)] = &[
    ('\u{0020}', 0.278), // space
    ('\u{0021}', 0.278), // exclam
    ('\u{0022}', 0.355), // quotedbl
    ('\u{0023}', 0.556), // numbersign
    ('\u{0024}', 0.556), // dollar
    ('\u{0025}', 0.889), // percent
    ('\u{0026}', 0.667), // ampersand
    ('\u{0027}', 0.191), // quotesingle
    ('\u{0028}', 0.333), // parenleft
    ('\u{0029}', 0.333), // parenright
    ('\u{002A}', 0.389), // asterisk
    ('\u{002B}', 0.584), // plus
    ('\u{002C}', 0.278), // comma
    ('\u{002D}', 0.333), // hyphen
    ('\u{002E}', 0.278), // period
    ('\u{002F}', 0.278), // slash
    ('\u{0030}', 0.556), // zero
    ('\u{0031}', 0.556), // one
    ('\u{0032}', 0.556), // two
    ('\u{0033}', 0.556), // three
    ('\u{0034}', 0.556), // four
    ('\u{0035}', 0.556), // five
    ('\u{0036}', 0.556), // six
    ('\u{0037}', 0.556), // seven
    ('\u{0038}', 0.556), // eight
    ('\u{0039}', 0.556), // nine
    ('\u{003A}', 0.278), // colon
    ('\u{003B}', 0.278), // semicolon
    ('\u{003C}', 0.584), // less
    ('\u{003D}', 0.584), // equal
    ('\u{003E}', 0.584), // greater
    ('\u{003F}', 0.556), // question
    ('\u{0040}', 1.015), // at
    ('\u{0041}', 0.667), // A
    ('\u{0042}', 0.667), // B
    ('\u{0043}', 0.722), // C
    ('\u{0044}', 0.722), // D
    ('\u{0045}', 0.667), // E
    ('\u{0046}', 0.611), // F
    ('\u{0047}', 0.778), // G
    ('\u{0048}', 0.722), // H
    ('\u{0049}', 0.278), // I
    ('\u{004A}', 0.500), // J
    ('\u{004B}', 0.667), // K
    ('\u{004C}', 0.556), // L
    ('\u{004D}', 0.833), // M
    ('\u{004E}', 0.722), // N
    ('\u{004F}', 0.778), // O
    ('\u{0050}', 0.667), // P
    ('\u{0051}', 0.778), // Q
    ('\u{0052}', 0.722), // R
    ('\u{0053}', 0.667), // S
    ('\u{0054}', 0.611), // T
    ('\u{0055}', 0.722), // U
    ('\u{0056}', 0.667), // V
    ('\u{0057}', 0.944), // W
    ('\u{0058}', 0.667), // X
    ('\u{0059}', 0.667), // Y
    ('\u{005A}', 0.611), // Z
    ('\u{005B}', 0.278), // bracketleft
    ('\u{005C}', 0.278), // backslash
    ('\u{005D}', 0.278), // bracketright
    ('\u{005E}', 0.469), // asciicircum
    ('\u{005F}', 0.556), // underscore
    ('\u{0060}', 0.333), // grave
    ('\u{0061}', 0.556), // a
    ('\u{0062}', 0.556), // b
    ('\u{0063}', 0.500), // c
    ('\u{0064}', 0.556), // d
    ('\u{0065}', 0.556), // e
    ('\u{0066}', 0.278), // f
    ('\u{0067}', 0.556), // g
    ('\u{0068}', 0.556), // h
    ('\u{0069}', 0.222), // i
    ('\u{006A}', 0.222), // j
    ('\u{006B}', 0.500), // k
    ('\u{006C}', 0.222), // l
    ('\u{006D}', 0.833), // m
    ('\u{006E}', 0.556), // n
    ('\u{006F}', 0.556), // o
    ('\u{0070}', 0.556), // p
    ('\u{0071}', 0.556), // q
    ('\u{0072}', 0.333), // r
    ('\u{0073}', 0.500), // s
    ('\u{0074}', 0.278), // t
    ('\u{0075}', 0.556), // u
    ('\u{0076}', 0.500), // v
    ('\u{0077}', 0.722), // w
    ('\u{0078}', 0.500), // x
    ('\u{0079}', 0.500), // y
    ('\u{007A}', 0.500), // z
    ('\u{007B}', 0.334), // braceleft
    ('\u{007C}', 0.260), // bar
    ('\u{007D}', 0.334), // braceright
    ('\u{007E}', 0.584), // asciitilde
    ('\u{00A1}', 0.333), // exclamdown
    ('\u{00A2}', 0.556), // cent
    ('\u{00A3}', 0.556), // sterling
    ('\u{00A4}', 0.556), // currency
    ('\u{00A5}', 0.556), // yen
    ('\u{00A6}', 0.260), // brokenbar
    ('\u{00A7}', 0.556), // section
    ('\u{00A8}', 0.333), // dieresis
    ('\u{00A9}', 0.737), // copyright
    ('\u{00AA}', 0.370), // ordfeminine
    ('\u{00AB}', 0.556), // guillemotleft
    ('\u{00AC}', 0.584), // logicalnot
    ('\u{00AE}', 0.737), // registered
    ('\u{00AF}', 0.333), // macron
    ('\u{00B0}', 0.400), // degree
    ('\u{00B1}', 0.584), // plusminus
    ('\u{00B2}', 0.333), // twosuperior
    ('\u{00B3}', 0.333), // threesuperior
    ('\u{00B4}', 0.333), // acute
    ('\u{00B5}', 0.556), // mu
    ('\u{00B6}', 0.537), // paragraph
    ('\u{00B7}', 0.278), // periodcentered
    ('\u{00B8}', 0.333), // cedilla
    ('\u{00B9}', 0.333), // onesuperior
    ('\u{00BA}', 0.365), // ordmasculine
    ('\u{00BB}', 0.556), // guillemotright
    ('\u{00BC}', 0.834), // onequarter
    ('\u{00BD}', 0.834), // onehalf
    ('\u{00BE}', 0.834), // threequarters
    ('\u{00BF}', 0.611), // questiondown
    ('\u{00C0}', 0.667), // Agrave
    ('\u{00C1}', 0.667), // Aacute
    ('\u{00C2}', 0.667), // Acircumflex
    ('\u{00C3}', 0.667), // Atilde
    ('\u{00C4}', 0.667), // Adieresis
    ('\u{00C5}', 0.667), // Aring
    ('\u{00C6}', 1.000), // AE
    ('\u{00C7}', 0.722), // Ccedilla
    ('\u{00C8}', 0.667), // Egrave
    ('\u{00C9}', 0.667), // Eacute
    ('\u{00CA}', 0.667), // Ecircumflex
    ('\u{00CB}', 0.667), // Edieresis
    ('\u{00CC}', 0.278), // Igrave
    ('\u{00CD}', 0.278), // Iacute
    ('\u{00CE}', 0.278), // Icircumflex
    ('\u{00CF}', 0.278), // Idieresis
    ('\u{00D0}', 0.722), // Eth
    ('\u{00D1}', 0.722), // Ntilde
    ('\u{00D2}', 0.778), // Ograve
    ('\u{00D3}', 0.778), // Oacute
    ('\u{00D4}', 0.778), // Ocircumflex
    ('\u{00D5}', 0.778), // Otilde
    ('\u{00D6}', 0.778), // Odieresis
    ('\u{00D7}', 0.584), // multiply
    ('\u{00D8}', 0.778), // Oslash
    ('\u{00D9}', 0.722), // Ugrave
    ('\u{00DA}', 0.722), // Uacute
    ('\u{00DB}', 0.722), // Ucircumflex
    ('\u{00DC}', 0.722), // Udieresis
    ('\u{00DD}', 0.667), // Yacute
    ('\u{00DE}', 0.667), // Thorn
    ('\u{00DF}', 0.611), // germandbls
    ('\u{00E0}', 0.556), // agrave
    ('\u{00E1}', 0.556), // aacute
    ('\u{00E2}', 0.556), // acircumflex
    ('\u{00E3}', 0.556), // atilde
    ('\u{00E4}', 0.556), // adieresis
    ('\u{00E5}', 0.556), // aring
    ('\u{00E6}', 0.889), // ae
    ('\u{00E7}', 0.500), // ccedilla
    ('\u{00E8}', 0.556), // egrave
    ('\u{00E9}', 0.556), // eacute
    ('\u{00EA}', 0.556), // ecircumflex
    ('\u{00EB}', 0.556), // edieresis
    ('\u{00EC}', 0.278), // igrave
    ('\u{00ED}', 0.278), // iacute
    ('\u{00EE}', 0.278), // icircumflex
    ('\u{00EF}', 0.278), // idieresis
    ('\u{00F0}', 0.556), // eth
    ('\u{00F1}', 0.556), // ntilde
    ('\u{00F2}', 0.556), // ograve
    ('\u{00F3}', 0.556), // oacute
    ('\u{00F4}', 0.556), // ocircumflex
    ('\u{00F5}', 0.556), // otilde
    ('\u{00F6}', 0.556), // odieresis
    ('\u{00F7}', 0.584), // divide
    ('\u{00F8}', 0.611), // oslash
    ('\u{00F9}', 0.556), // ugrave
    ('\u{00FA}', 0.556), // uacute
    ('\u{00FB}', 0.556), // ucircumflex
    ('\u{00FC}', 0.556), // udieresis
    ('\u{00FD}', 0.500), // yacute
    ('\u{00FE}', 0.556), // thorn
    ('\u{00FF}', 0.500), // ydieresis
    ('\u{0100}', 0.667), // Amacron
    ('\u{0101}', 0.556), // amacron
    ('\u{0102}', 0.667), // Abreve
    ('\u{0103}', 0.556), // abreve
    ('\u{0104}', 0.667), // Aogonek
    ('\u{0105}', 0.556), // aogonek
    ('\u{0106}', 0.722), // Cacute
    ('\u{0107}', 0.500), // cacute
    ('\u{010C}', 0.722), // Ccaron
    ('\u{010D}', 0.500), // ccaron
    ('\u{010E}', 0.722), // Dcaron
    ('\u{010F}', 0.643), // dcaron
    ('\u{0110}', 0.722), // Dcroat
    ('\u{0111}', 0.556), // dcroat
    ('\u{0112}', 0.667), // Emacron
    ('\u{0113}', 0.556), // emacron
    ('\u{0116}', 0.667), // Edotaccent
    ('\u{0117}', 0.556), // edotaccent
    ('\u{0118}', 0.667), // Eogonek
    ('\u{0119}', 0.556), // eogonek
    ('\u{011A}', 0.667), // Ecaron
    ('\u{011B}', 0.556), // ecaron
    ('\u{011E}', 0.778), // Gbreve
    ('\u{011F}', 0.556), // gbreve
    ('\u{0122}', 0.778), // Gcommaaccent
    ('\u{0123}', 0.556), // gcommaaccent
    ('\u{012A}', 0.278), // Imacron
    ('\u{012B}', 0.278), // imacron
    ('\u{012E}', 0.278), // Iogonek
    ('\u{012F}', 0.222), // iogonek
    ('\u{0130}', 0.278), // Idotaccent
    ('\u{0131}', 0.278), // dotlessi
    ('\u{0136}', 0.667), // Kcommaaccent
    ('\u{0137}', 0.500), // kcommaaccent
    ('\u{0139}', 0.556), // Lacute
    ('\u{013A}', 0.222), // lacute
    ('\u{013B}', 0.556), // Lcommaaccent
    ('\u{013C}', 0.222), // lcommaaccent
    ('\u{013D}', 0.556), // Lcaron
    ('\u{013E}', 0.299), // lcaron
    ('\u{0141}', 0.556), // Lslash
    ('\u{0142}', 0.222), // lslash
    ('\u{0143}', 0.722), // Nacute
    ('\u{0144}', 0.556), // nacute
    ('\u{0145}', 0.722), // Ncommaaccent
    ('\u{0146}', 0.556), // ncommaaccent
    ('\u{0147}', 0.722), // Ncaron
    ('\u{0148}', 0.556), // ncaron
    ('\u{014C}', 0.778), // Omacron
    ('\u{014D}', 0.556), // omacron
    ('\u{0150}', 0.778), // Ohungarumlaut
    ('\u{0151}', 0.556), // ohungarumlaut
    ('\u{0152}', 1.000), // OE
    ('\u{0153}', 0.944), // oe
    ('\u{0154}', 0.722), // Racute
    ('\u{0155}', 0.333), // racute
    ('\u{0156}', 0.722), // Rcommaaccent
    ('\u{0157}', 0.333), // rcommaaccent
    ('\u{0158}', 0.722), // Rcaron
    ('\u{0159}', 0.333), // rcaron
    ('\u{015A}', 0.667), // Sacute
    ('\u{015B}', 0.500), // sacute
    ('\u{015E}', 0.667), // Scedilla
    ('\u{015F}', 0.500), // scedilla
    ('\u{0160}', 0.667), // Scaron
    ('\u{0161}', 0.500), // scaron
    ('\u{0162}', 0.611), // Tcommaaccent
    ('\u{0163}', 0.278), // tcommaaccent
    ('\u{0164}', 0.611), // Tcaron
    ('\u{0165}', 0.317), // tcaron
    ('\u{016A}', 0.722), // Umacron
    ('\u{016B}', 0.556), // umacron
    ('\u{016E}', 0.722), // Uring
    ('\u{016F}', 0.556), // uring
    ('\u{0170}', 0.722), // Uhungarumlaut
    ('\u{0171}', 0.556), // uhungarumlaut
    ('\u{0172}', 0.722), // Uogonek
    ('\u{0173}', 0.556), // uogonek
    ('\u{0178}', 0.667), // Ydieresis
    ('\u{0179}', 0.611), // Zacute
    ('\u{017A}', 0.500), // zacute
    ('\u{017B}', 0.611), // Zdotaccent
    ('\u{017C}', 0.500), // zdotaccent
    ('\u{017D}', 0.611), // Zcaron
    ('\u{017E}', 0.500), // zcaron
    ('\u{0192}', 0.556), // florin
    ('\u{0218}', 0.667), // Scommaaccent
    ('\u{0219}', 0.500), // scommaaccent
    ('\u{02C6}', 0.333), // circumflex
    ('\u{02C7}', 0.333), // caron
    ('\u{02D8}', 0.333), // breve
    ('\u{02D9}', 0.333), // dotaccent
    ('\u{02DA}', 0.333), // ring
    ('\u{02DB}', 0.333), // ogonek
    ('\u{02DC}', 0.333), // tilde
    ('\u{02DD}', 0.333), // hungarumlaut
    ('\u{2013}', 0.556), // endash
    ('\u{2014}', 1.000), // emdash
    ('\u{2018}', 0.222), // quoteleft
    ('\u{2019}', 0.222), // quoteright
    ('\u{201A}', 0.222), // quotesinglbase
    ('\u{201C}', 0.333), // quotedblleft
    ('\u{201D}', 0.333), // quotedblright
    ('\u{201E}', 0.333), // quotedblbase
    ('\u{2020}', 0.556), // dagger
    ('\u{2021}', 0.556), // daggerdbl
    ('\u{2022}', 0.350), // bullet
    ('\u{2026}', 1.000), // ellipsis
    ('\u{2030}', 1.000), // perthousand
    ('\u{2039}', 0.333), // guilsinglleft
    ('\u{203A}', 0.333), // guilsinglright
    ('\u{2044}', 0.167), // fraction
    ('\u{20AC}', 0.556), // Euro
    ('\u{2122}', 1.000), // trademark
    ('\u{2202}', 0.476), // partialdiff
    ('\u{2206}', 0.612), // Delta
    ('\u{2211}', 0.600), // summation
    ('\u{2212}', 0.584), // minus
    ('\u{221A}', 0.453), // radical
    ('\u{2260}', 0.549), // notequal
    ('\u{2264}', 0.549), // lessequal
    ('\u{2265}', 0.549), // greaterequal
    ('\u{25CA}', 0.471), // lozenge
    ('\u{F6C3}', 0.250), // commaaccent
    ('\u{FB01}', 0.500), // fi
    ('\u{FB02}', 0.500), // fl
];

pub(crate) static HELVETICA_BOLD: &[(char, f64)] = &[
    ('\u{0020}', 0.278), // space
    ('\u{0021}', 0.333), // exclam
    ('\u{0022}', 0.474), // quotedbl
    ('\u{0023}', 0.556), // numbersign
    ('\u{0024}', 0.556), // dollar
    ('\u{0025}', 0.889), // percent
    ('\u{0026}', 0.722), // ampersand
    ('\u{0027}', 0.238), // quotesingle
    ('\u{0028}', 0.333), // parenleft
    ('\u{0029}', 0.333), // parenright
    ('\u{002A}', 0.389), // asterisk
    ('\u{002B}', 0.584), // plus
    ('\u{002C}', 0.278), // comma
    ('\u{002D}', 0.333), // hyphen
    ('\u{002E}', 0.278), // period
    ('\u{002F}', 0.278), // slash
    ('\u{0030}', 0.556), // zero
    ('\u{0031}', 0.556), // one
    ('\u{0032}', 0.556), // two
    ('\u{0033}', 0.556), // three
    ('\u{0034}', 0.556), // four
    ('\u{0035}', 0.556), // five
    ('\u{0036}', 0.556), // six
    ('\u{0037}', 0.556), // seven
    ('\u{0038}', 0.556), // eight
    ('\u{0039}', 0.556), // nine
    ('\u{003A}', 0.333), // colon
    ('\u{003B}', 0.333), // semicolon
    ('\u{003C}', 0.584), // less
    ('\u{003D}', 0.584), // equal
    ('\u{003E}', 0.584), // greater
    ('\u{003F}', 0.611), // question
    ('\u{0040}', 0.975), // at
    ('\u{0041}', 0.722), // A
    ('\u{0042}', 0.722), // B
    ('\u{0043}', 0.722), // C
    ('\u{0044}', 0.722), // D
    ('\u{0045}', 0.667), // E
    ('\u{0046}', 0.611), // F
    ('\u{0047}', 0.778), // G
    ('\u{0048}', 0.722), // H
    ('\u{0049}', 0.278), // I
    ('\u{004A}', 0.556), // J
    ('\u{004B}', 0.722), // K
    ('\u{004C}', 0.611), // L
    ('\u{004D}', 0.833), // M
    ('\u{004E}', 0.722), // N
    ('\u{004F}', 0.778), // O
    ('\u{0050}', 0.667), // P
    ('\u{0051}', 0.778), // Q
    ('\u{0052}', 0.722), // R
    ('\u{0053}', 0.667), // S
    ('\u{0054}', 0.611), // T
    ('\u{0055}', 0.722), // U
    ('\u{0056}', 0.667), // V
    ('\u{0057}', 0.944), // W
    ('\u{0058}', 0.667), // X
    ('\u{0059}', 0.667), // Y
    ('\u{005A}', 0.611), // Z
    ('\u{005B}', 0.333), // bracketleft
    ('\u{005C}', 0.278), // backslash
    ('\u{005D}', 0.333), // bracketright
    ('\u{005E}', 0.584), // asciicircum
    ('\u{005F}', 0.556), // underscore
    ('\u{0060}', 0.333), // grave
    ('\u{0061}', 0.556), // a
    ('\u{0062}', 0.611), // b
    ('\u{0063}', 0.556), // c
    ('\u{0064}', 0.611), // d
    ('\u{0065}', 0.556), // e
    ('\u{0066}', 0.333), // f
    ('\u{0067}', 0.611), // g
    ('\u{0068}', 0.611), // h
    ('\u{0069}', 0.278), // i
    ('\u{006A}', 0.278), // j
    ('\u{006B}', 0.556), // k
    ('\u{006C}', 0.278), // l
    ('\u{006D}', 0.889), // m
    ('\u{006E}', 0.611), // n
    ('\u{006F}', 0.611), // o
    ('\u{0070}', 0.611), // p
    ('\u{0071}', 0.611), // q
    ('\u{0072}', 0.389), // r
    ('\u{0073}', 0.556), // s
    ('\u{0074}', 0.333), // t
    ('\u{0075}', 0.611), // u
    ('\u{0076}', 0.556), // v
    ('\u{0077}', 0.778), // w
    ('\u{0078}', 0.556), // x
    ('\u{0079}', 0.556), // y
    ('\u{007A}', 0.500), // z
    ('\u{007B}', 0.389), // braceleft
    ('\u{007C}', 0.280), // bar
    ('\u{007D}', 0.389), // braceright
    ('\u{007E}', 0.584), // asciitilde
    ('\u{00A1}', 0.333), // exclamdown
    ('\u{00A2}', 0.556), // cent
    ('\u{00A3}', 0.556), // sterling
    ('\u{00A4}', 0.556), // currency
    ('\u{00A5}', 0.556), // yen
    ('\u{00A6}', 0.280), // brokenbar
    ('\u{00A7}', 0.556), // section
    ('\u{00A8}', 0.333), // dieresis
    ('\u{00A9}', 0.737), // copyright
    ('\u{00AA}', 0.370), // ordfeminine
    ('\u{00AB}', 0.556), // guillemotleft
    ('\u{00AC}', 0.584), // logicalnot
    ('\u{00AE}', 0.737), // registered
    ('\u{00AF}', 0.333), // macron
    ('\u{00B0}', 0.400), // degree
    ('\u{00B1}', 0.584), // plusminus
    ('\u{00B2}', 0.333), // twosuperior
    ('\u{00B3}', 0.333), // threesuperior
    ('\u{00B4}', 0.333), // acute
    ('\u{00B5}', 0.611), // mu
    ('\u{00B6}', 0.556), // paragraph
    ('\u{00B7}', 0.278), // periodcentered
    ('\u{00B8}', 0.333), // cedilla
    ('\u{00B9}', 0.333), // onesuperior
    ('\u{00BA}', 0.365), // ordmasculine
    ('\u{00BB}', 0.556), // guillemotright
    ('\u{00BC}', 0.834), // onequarter
    ('\u{00BD}', 0.834), // onehalf
    ('\u{00BE}', 0.834), // threequarters
    ('\u{00BF}', 0.611), // questiondown
    ('\u{00C0}', 0.722), // Agrave
    ('\u{00C1}', 0.722), // Aacute
    ('\u{00C2}', 0.722), // Acircumflex
    ('\u{00C3}', 0.722), // Atilde
    ('\u{00C4}', 0.722), // Adieresis
    ('\u{00C5}', 0.722), // Aring
    ('\u{00C6}', 1.000), // AE
    ('\u{00C7}', 0.722), // Ccedilla
    ('\u{00C8}', 0.667), // Egrave
    ('\u{00C9}', 0.667), // Eacute
    ('\u{00CA}', 0.667), // Ecircumflex
    ('\u{00CB}', 0.667), // Edieresis
    ('\u{00CC}', 0.278), // Igrave
    ('\u{00CD}', 0.278), // Iacute
    ('\u{00CE}', 0.278), // Icircumflex
    ('\u{00CF}', 0.278), // Idieresis
    ('\u{00D0}', 0.722), // Eth
    ('\u{00D1}', 0.722), // Ntilde
    ('\u{00D2}', 0.778), // Ograve
    ('\u{00D3}', 0.778), // Oacute
    ('\u{00D4}', 0.778), // Ocircumflex
    ('\u{00D5}', 0.778), // Otilde
    ('\u{00D6}', 0.778), // Odieresis
    ('\u{00D7}', 0.584), // multiply
    ('\u{00D8}', 0.778), // Oslash
    ('\u{00D9}', 0.722), // Ugrave
    ('\u{00DA}', 0.722), // Uacute
    ('\u{00DB}', 0.722), // Ucircumflex
    ('\u{00DC}', 0.722), // Udieresis
    ('\u{00DD}', 0.667), // Yacute
    ('\u{00DE}', 0.667), // Thorn
    ('\u{00DF}', 0.611), // germandbls
    ('\u{00E0}', 0.556), // agrave
    ('\u{00E1}', 0.556), // aacute
    ('\u{00E2}', 0.556), // acircumflex
    ('\u{00E3}', 0.556), // atilde
    ('\u{00E4}', 0.556), // adieresis
    ('\u{00E5}', 0.556), // aring
    ('\u{00E6}', 0.889), // ae
    ('\u{00E7}', 0.556), // ccedilla
    ('\u{00E8}', 0.556), // egrave
    ('\u{00E9}', 0.556), // eacute
    ('\u{00EA}', 0.556), // ecircumflex
    ('\u{00EB}', 0.556), // edieresis
    ('\u{00EC}', 0.278), // igrave
    ('\u{00ED}', 0.278), // iacute
    ('\u{00EE}', 0.278), // icircumflex
    ('\u{00EF}', 0.278), // idieresis
    ('\u{00F0}', 0.611), // eth
    ('\u{00F1}', 0.611), // ntilde
    ('\u{00F2}', 0.611), // ograve
    ('\u{00F3}', 0.611), // oacute
    ('\u{00F4}', 0.611), // ocircumflex
    ('\u{00F5}', 0.611), // otilde
    ('\u{00F6}', 0.611), // odieresis
    ('\u{00F7}', 0.584), // divide
    ('\u{00F8}', 0.611), // oslash
    ('\u{00F9}', 0.611), // ugrave
    ('\u{00FA}', 0.611), // uacute
    ('\u{00FB}', 0.611), // ucircumflex
    ('\u{00FC}', 0.611), // udieresis
    ('\u{00FD}', 0.556), // yacute
    ('\u{00FE}', 0.611), // thorn
    ('\u{00FF}', 0.556), // ydieresis
    ('\u{0100}', 0.722), // Amacron
    ('\u{0101}', 0.556), // amacron
    ('\u{0102}', 0.722), // Abreve
    ('\u{0103}', 0.556), // abreve
    ('\u{0104}', 0.722), // Aogonek
    ('\u{0105}', 0.556), // aogonek
    ('\u{0106}', 0.722), // Cacute
    ('\u{0107}', 0.556), // cacute
    ('\u{010C}', 0.722), // Ccaron
    ('\u{010D}', 0.556), // ccaron
    ('\u{010E}', 0.722), // Dcaron
    ('\u{010F}', 0.743), // dcaron
    ('\u{0110}', 0.722), // Dcroat
    ('\u{0111}', 0.611), // dcroat
    ('\u{0112}', 0.667), // Emacron
    ('\u{0113}', 0.556), // emacron
    ('\u{0116}', 0.667), // Edotaccent
    ('\u{0117}', 0.556), // edotaccent
    ('\u{0118}', 0.667), // Eogonek
    ('\u{0119}', 0.556), // eogonek
    ('\u{011A}', 0.667), // Ecaron
    ('\u{011B}', 0.556), // ecaron
    ('\u{011E}', 0.778), // Gbreve
    ('\u{011F}', 0.611), // gbreve
    ('\u{0122}', 0.778), // Gcommaaccent
    ('\u{0123}', 0.611), // gcommaaccent
    ('\u{012A}', 0.278), // Imacron
    ('\u{012B}', 0.278), // imacron
    ('\u{012E}', 0.278), // Iogonek
    ('\u{012F}', 0.278), // iogonek
    ('\u{0130}', 0.278), // Idotaccent
    ('\u{0131}', 0.278), // dotlessi
    ('\u{0136}', 0.722), // Kcommaaccent
    ('\u{0137}', 0.556), // kcommaaccent
    ('\u{0139}', 0.611), // Lacute
    ('\u{013A}', 0.278), // lacute
    ('\u{013B}', 0.611), // Lcommaaccent
    ('\u{013C}', 0.278), // lcommaaccent
    ('\u{013D}', 0.611), // Lcaron
    ('\u{013E}', 0.400), // lcaron
    ('\u{0141}', 0.611), // Lslash
    ('\u{0142}', 0.278), // lslash
    ('\u{0143}', 0.722), // Nacute
    ('\u{0144}', 0.611), // nacute
    ('\u{0145}', 0.722), // Ncommaaccent
    ('\u{0146}', 0.611), // ncommaaccent
    ('\u{0147}', 0.722), // Ncaron
    ('\u{0148}', 0.611), // ncaron
    ('\u{014C}', 0.778), // Omacron
    ('\u{014D}', 0.611), // omacron
    ('\u{0150}', 0.778), // Ohungarumlaut
    ('\u{0151}', 0.611), // ohungarumlaut
    ('\u{0152}', 1.000), // OE
    ('\u{0153}', 0.944), // oe
    ('\u{0154}', 0.722), // Racute
    ('\u{0155}', 0.389), // racute
    ('\u{0156}', 0.722), // Rcommaaccent
    ('\u{0157}', 0.389), // rcommaaccent
    ('\u{0158}', 0.722), // Rcaron
    ('\u{0159}', 0.389), // rcaron
    ('\u{015A}', 0.667), // Sacute
    ('\u{015B}', 0.556), // sacute
    ('\u{015E}', 0.667), // Scedilla
    ('\u{015F}', 0.556), // scedilla
    ('\u{0160}', 0.667), // Scaron
    ('\u{0161}', 0.556), // scaron
    ('\u{0162}', 0.611), // Tcommaaccent
    ('\u{0163}', 0.333), // tcommaaccent
    ('\u{0164}', 0.611), // Tcaron
    ('\u{0165}', 0.389), // tcaron
    ('\u{016A}', 0.722), // Umacron
    ('\u{016B}', 0.611), // umacron
    ('\u{016E}', 0.722), // Uring
    ('\u{016F}', 0.611), // uring
    ('\u{0170}', 0.722), // Uhungarumlaut
    ('\u{0171}', 0.611), // uhungarumlaut
    ('\u{0172}', 0.722), // Uogonek
    ('\u{0173}', 0.611), // uogonek
    ('\u{0178}', 0.667), // Ydieresis
    ('\u{0179}', 0.611), // Zacute
    ('\u{017A}', 0.500), // zacute
    ('\u{017B}', 0.611), // Zdotaccent
    ('\u{017C}', 0.500), // zdotaccent
    ('\u{017D}', 0.611), // Zcaron
    ('\u{017E}', 0.500), // zcaron
    ('\u{0192}', 0.556), // florin
    ('\u{0218}', 0.667), // Scommaaccent
    ('\u{0219}', 0.556), // scommaaccent
    ('\u{02C6}', 0.333), // circumflex
    ('\u{02C7}', 0.333), // caron
    ('\u{02D8}', 0.333), // breve
    ('\u{02D9}', 0.333), // dotaccent
    ('\u{02DA}', 0.333), // ring
    ('\u{02DB}', 0.333), // ogonek
    ('\u{02DC}', 0.333), // tilde
    ('\u{02DD}', 0.333), // hungarumlaut
    ('\u{2013}', 0.556), // endash
    ('\u{2014}', 1.000), // emdash
    ('\u{2018}', 0.278), // quoteleft
    ('\u{2019}', 0.278), // quoteright
    ('\u{201A}', 0.278), // quotesinglbase
    ('\u{201C}', 0.500), // quotedblleft
    ('\u{201D}', 0.500), // quotedblright
    ('\u{201E}', 0.500), // quotedblbase
    ('\u{2020}', 0.556), // dagger
    ('\u{2021}', 0.556), // daggerdbl
    ('\u{2022}', 0.350), // bullet
    ('\u{2026}', 1.000), // ellipsis
    ('\u{2030}', 1.000), // perthousand
    ('\u{2039}', 0.333), // guilsinglleft
    ('\u{203A}', 0.333), // guilsinglright
    ('\u{2044}', 0.167), // fraction
    ('\u{20AC}', 0.556), // Euro
    ('\u{2122}', 1.000), // trademark
    ('\u{2202}', 0.494), // partialdiff
    ('\u{2206}', 0.612), // Delta
    ('\u{2211}', 0.600), // summation
    ('\u{2212}', 0.584), // minus
    ('\u{221A}', 0.549), // radical
    ('\u{2260}', 0.549), // notequal
    ('\u{2264}', 0.549), // lessequal
    ('\u{2265}', 0.549), // greaterequal
    ('\u{25CA}', 0.494), // lozenge
    ('\u{F6C3}', 0.250), // commaaccent
    ('\u{FB01}', 0.611), // fi
    ('\u{FB02}', 0.611), // fl
];
